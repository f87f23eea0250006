//! Applies derived visual parameters to DOM elements via inline styles.

use crate::dom::{append_div, set_styles};
use aurora_core::{
    GlowParams, LightConfig, LightVariant, LightingState, ParticleField, ParticleVisual,
    RenderError, SurfaceId, Target, TrailSegment, VariantTuning, VisualSink, TRAIL_SEGMENTS,
};
use web_sys as web;

/// Inline properties the glass element had before mounting.
const TOUCHED_PROPS: [&str; 4] = ["position", "overflow", "border-radius", "will-change"];

/// Overlay layers added inside one glass surface.
pub struct GlassLayers {
    surface: web::HtmlElement,
    rim: web::HtmlElement,
    shine: web::HtmlElement,
    caustic: Option<web::HtmlElement>,
    statics: Vec<web::HtmlElement>,
    saved: Vec<(&'static str, String)>,
}

impl GlassLayers {
    pub fn mount(
        document: &web::Document,
        surface: &web::HtmlElement,
        variant: LightVariant,
        config: &LightConfig,
    ) -> anyhow::Result<Self> {
        let tuning = VariantTuning::of(variant);
        let style = surface.style();
        let saved = TOUCHED_PROPS
            .iter()
            .map(|&name| (name, style.get_property_value(name).unwrap_or_default()))
            .collect();

        // overlays are absolutely positioned and must stay inside the glass
        let position = document
            .default_view()
            .and_then(|w| w.get_computed_style(surface).ok().flatten())
            .and_then(|c| c.get_property_value("position").ok())
            .unwrap_or_default();
        if position.is_empty() || position == "static" {
            _ = style.set_property("position", "relative");
        }
        _ = style.set_property("overflow", "hidden");
        _ = style.set_property("will-change", "transform");
        _ = style.set_property("border-radius", &format!("{}px", config.corner_radius));

        let radius = "border-radius:inherit;";
        let mut statics = Vec::new();
        if tuning.chromatic_tint {
            statics.push(append_div(
                document,
                surface,
                "aurora-tint",
                &format!(
                    "inset:0;{radius}background:linear-gradient(135deg, rgba(80,160,255,0.08) 0%, \
                     transparent 35%, transparent 65%, rgba(200,130,255,0.06) 100%);"
                ),
            )?);
        }
        let rim = append_div(
            document,
            surface,
            "aurora-rim",
            &format!(
                "inset:0;{radius}padding:1px;opacity:{};\
                 mask:linear-gradient(black,black) content-box exclude,linear-gradient(black,black);\
                 -webkit-mask-composite:xor;",
                tuning.rim_layer_opacity
            ),
        )?;
        let shine = append_div(
            document,
            surface,
            "aurora-shine",
            &format!(
                "inset:0;{radius}opacity:0;mix-blend-mode:{};",
                tuning.shine_blend.as_css()
            ),
        )?;
        let caustic = if tuning.caustic {
            Some(append_div(
                document,
                surface,
                "aurora-caustic",
                &format!("inset:0;{radius}mix-blend-mode:overlay;"),
            )?)
        } else {
            None
        };
        statics.push(append_div(
            document,
            surface,
            "aurora-edge",
            &format!(
                "left:0;right:0;top:0;height:1px;background:linear-gradient(90deg, transparent 10%, \
                 rgba(255,255,255,{}) 50%, transparent 90%);",
                tuning.edge_highlight_alpha
            ),
        )?);
        Ok(Self {
            surface: surface.clone(),
            rim,
            shine,
            caustic,
            statics,
            saved,
        })
    }

    fn apply(&self, target: Target, l: &LightingState) -> Result<(), RenderError> {
        let transform = format!(
            "perspective({}px) rotateX({:.3}deg) rotateY({:.3}deg)",
            l.perspective_px, l.tilt_x_deg, l.tilt_y_deg
        );
        set_styles(&self.surface, target, &[("transform", transform.as_str())])?;

        let s = &l.specular;
        let shine = format!(
            "radial-gradient({}px circle at {:.2}% {:.2}%, rgba(255,255,255,{}) 0%, \
             rgba(255,255,255,0.12) 30%, rgba(255,255,255,0) {}%)",
            s.radius_px, s.center_pct.x, s.center_pct.y, s.core_alpha, s.falloff_pct
        );
        set_styles(
            &self.shine,
            target,
            &[("background", shine.as_str()), ("opacity", format!("{:.3}", s.opacity).as_str())],
        )?;

        let r = &l.rim;
        let rim = format!(
            "conic-gradient(from {:.2}deg, rgba(255,255,255,0.5) 0deg, rgba(255,255,255,0) {}deg, \
             rgba(255,255,255,0) {}deg, rgba(255,255,255,0.5) 360deg)",
            r.angle_deg,
            r.spread_deg,
            360.0 - r.spread_deg
        );
        set_styles(&self.rim, target, &[("background", rim.as_str())])?;

        if let (Some(el), Some(c)) = (&self.caustic, &l.caustic) {
            let [red, green, blue, alpha] = c.rgba;
            let glow = format!(
                "radial-gradient(ellipse at {:.2}% {:.2}%, rgba({red},{green},{blue},{alpha}) 0%, transparent 60%)",
                c.center_pct.x, c.center_pct.y
            );
            set_styles(el, target, &[("background", glow.as_str())])?;
        }
        Ok(())
    }

    pub fn unmount(&self) {
        self.rim.remove();
        self.shine.remove();
        if let Some(c) = &self.caustic {
            c.remove();
        }
        for el in &self.statics {
            el.remove();
        }
        let style = self.surface.style();
        _ = style.remove_property("transform");
        for (name, value) in &self.saved {
            if value.is_empty() {
                _ = style.remove_property(name);
            } else {
                _ = style.set_property(name, value);
            }
        }
    }
}

pub struct DomSink {
    root: web::HtmlElement,
    glow: web::HtmlElement,
    particles: Vec<web::HtmlElement>,
    segments: Vec<web::HtmlElement>,
    glass: Vec<(SurfaceId, GlassLayers)>,
}

impl DomSink {
    /// Build the glow, particle and trail layers under `container`.
    pub fn mount(
        document: &web::Document,
        container: &web::HtmlElement,
        field: &ParticleField,
    ) -> anyhow::Result<Self> {
        let root = append_div(document, container, "aurora-layers", "inset:0;overflow:hidden;")?;
        let glow = append_div(document, &root, "aurora-glow", "inset:0;")?;

        let field_layer = append_div(document, &root, "aurora-field", "inset:0;")?;
        let mut particles = Vec::with_capacity(field.len());
        for p in field.particles() {
            let l = p.layout();
            particles.push(append_div(
                document,
                &field_layer,
                "aurora-particle",
                &format!(
                    "left:{:.3}%;top:{:.3}%;width:{:.2}px;height:{:.2}px;border-radius:2px;\
                     background-color:{};opacity:{:.3};will-change:transform,opacity;",
                    l.left_pct, l.top_pct, l.width_px, l.height_px, l.color, l.opacity
                ),
            )?);
        }

        let trail_layer = append_div(document, &root, "aurora-trail", "inset:0;")?;
        let mut segments = Vec::with_capacity(TRAIL_SEGMENTS);
        for _ in 0..TRAIL_SEGMENTS {
            segments.push(append_div(
                document,
                &trail_layer,
                "aurora-trail-segment",
                "top:0;left:0;width:20px;height:3px;border-radius:2px;opacity:0;\
                 will-change:transform,opacity,width,height;",
            )?);
        }

        log::debug!(
            "dom sink mounted: {} particles, {} trail segments",
            particles.len(),
            segments.len()
        );
        Ok(Self {
            root,
            glow,
            particles,
            segments,
            glass: Vec::new(),
        })
    }

    pub fn add_glass(&mut self, id: SurfaceId, layers: GlassLayers) {
        self.glass.push((id, layers));
    }

    pub fn remove_glass(&mut self, id: SurfaceId) {
        if let Some(pos) = self.glass.iter().position(|(sid, _)| *sid == id) {
            let (_, layers) = self.glass.remove(pos);
            layers.unmount();
        }
    }

    pub fn unmount(&mut self) {
        for (_, layers) in self.glass.drain(..) {
            layers.unmount();
        }
        self.root.remove();
    }
}

impl VisualSink for DomSink {
    fn particle(&mut self, index: usize, v: &ParticleVisual) -> Result<(), RenderError> {
        let target = Target::Particle(index);
        let el = self
            .particles
            .get(index)
            .ok_or(RenderError::NotAttached { target })?;
        let transform = format!(
            "translate({:.2}px, {:.2}px) rotate({:.2}deg)",
            v.offset.x, v.offset.y, v.rotation_deg
        );
        set_styles(
            el,
            target,
            &[
                ("transform", transform.as_str()),
                ("opacity", format!("{:.3}", v.opacity).as_str()),
                ("background-color", v.color.to_hex().as_str()),
            ],
        )
    }

    fn trail_segment(&mut self, index: usize, s: &TrailSegment) -> Result<(), RenderError> {
        let target = Target::TrailSegment(index);
        let el = self
            .segments
            .get(index)
            .ok_or(RenderError::NotAttached { target })?;
        let origin = s.origin();
        let transform = format!(
            "translate({:.2}px, {:.2}px) rotate({:.2}deg)",
            origin.x, origin.y, s.angle_deg
        );
        set_styles(
            el,
            target,
            &[
                ("transform", transform.as_str()),
                ("width", format!("{:.2}px", s.length).as_str()),
                ("height", format!("{:.2}px", s.thickness).as_str()),
                ("opacity", format!("{:.3}", s.opacity).as_str()),
                ("background-color", s.color.to_hex().as_str()),
            ],
        )
    }

    fn glow(&mut self, g: &GlowParams) -> Result<(), RenderError> {
        let background = format!(
            "radial-gradient({}px circle at {:.2}% {:.2}%, {} 0%, {} {}%, transparent {}%)",
            g.radius_px,
            g.center.x * 100.0,
            g.center.y * 100.0,
            g.inner,
            g.mid,
            g.mid_stop_pct,
            g.fade_stop_pct
        );
        set_styles(&self.glow, Target::Glow, &[("background", background.as_str())])
    }

    fn lighting(&mut self, surface: SurfaceId, l: &LightingState) -> Result<(), RenderError> {
        let target = Target::Surface(surface.0);
        let (_, layers) = self
            .glass
            .iter()
            .find(|(sid, _)| *sid == surface)
            .ok_or(RenderError::NotAttached { target })?;
        layers.apply(target, l)
    }
}
