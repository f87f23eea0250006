//! Reactive glass lighting: tilt, specular highlight, rim light and caustic.
//!
//! `derive_lighting` is a pure function of the smoothed surface pointer, the
//! highlight level and configuration. `LightReactor` owns the per-surface
//! pointer state that feeds it.

use crate::config::{LightConfig, LightVariant};
use crate::constants::{LIGHT_LERP_RELEASE, SHINE_FADE_SEC};
use crate::easing::{ReleaseFade, EASE};
use crate::pointer::{
    PointerState, PointerTracker, SmoothedPointer, SmoothingRates, SurfaceGeometry,
};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlendMode {
    SoftLight,
    Overlay,
}

impl BlendMode {
    pub fn as_css(self) -> &'static str {
        match self {
            BlendMode::SoftLight => "soft-light",
            BlendMode::Overlay => "overlay",
        }
    }
}

/// Opacity and blend tuning that separates the two glass variants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VariantTuning {
    pub engaged_lerp: f32,
    pub perspective_px: f32,
    pub shine_core_alpha: f32,
    pub shine_falloff_pct: f32,
    pub shine_blend: BlendMode,
    pub rim_spread_deg: f32,
    pub rim_layer_opacity: f32,
    pub caustic: bool,
    /// Peak alpha of the static refraction line along the top edge.
    pub edge_highlight_alpha: f32,
    /// Static prismatic tint in opposite corners.
    pub chromatic_tint: bool,
}

impl VariantTuning {
    pub fn of(variant: LightVariant) -> Self {
        match variant {
            LightVariant::Frosted => Self {
                engaged_lerp: 0.08,
                perspective_px: 800.0,
                shine_core_alpha: 0.35,
                shine_falloff_pct: 70.0,
                shine_blend: BlendMode::SoftLight,
                rim_spread_deg: 60.0,
                rim_layer_opacity: 0.7,
                caustic: false,
                edge_highlight_alpha: 0.9,
                chromatic_tint: false,
            },
            LightVariant::Tinted => Self {
                engaged_lerp: 0.1,
                perspective_px: 600.0,
                shine_core_alpha: 0.4,
                shine_falloff_pct: 65.0,
                shine_blend: BlendMode::Overlay,
                rim_spread_deg: 50.0,
                rim_layer_opacity: 0.5,
                caustic: true,
                edge_highlight_alpha: 0.8,
                chromatic_tint: true,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Specular {
    /// Percent of surface size.
    pub center_pct: Vec2,
    pub radius_px: f32,
    pub opacity: f32,
    pub core_alpha: f32,
    pub falloff_pct: f32,
    pub blend: BlendMode,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RimLight {
    pub angle_deg: f32,
    pub spread_deg: f32,
    pub layer_opacity: f32,
}

/// Refraction glow mirrored across the surface center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Caustic {
    pub center_pct: Vec2,
    pub rgba: [f32; 4],
}

const CAUSTIC_RGBA: [f32; 4] = [140.0, 180.0, 255.0, 0.15];

/// Derived lighting for one surface on one tick. Never persisted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightingState {
    pub tilt_x_deg: f32,
    pub tilt_y_deg: f32,
    pub perspective_px: f32,
    pub corner_radius_px: f32,
    pub specular: Specular,
    pub rim: RimLight,
    pub caustic: Option<Caustic>,
}

/// Rim sweep angle, degrees: `atan2(sy − 0.5, sx − 0.5)` rotated so 0° points up.
#[inline]
pub fn rim_angle_deg(smoothed: Vec2) -> f32 {
    let d = smoothed - Vec2::splat(0.5);
    d.y.atan2(d.x).to_degrees() + 90.0
}

pub fn derive_lighting(
    smoothed: Vec2,
    shine_opacity: f32,
    config: &LightConfig,
    variant: LightVariant,
) -> LightingState {
    let tuning = VariantTuning::of(variant);
    let max_tilt = config.max_tilt_degrees.abs();
    let shine = smoothed * 100.0;
    LightingState {
        tilt_x_deg: ((smoothed.y - 0.5) * -max_tilt).clamp(-max_tilt, max_tilt),
        tilt_y_deg: ((smoothed.x - 0.5) * max_tilt).clamp(-max_tilt, max_tilt),
        perspective_px: tuning.perspective_px,
        corner_radius_px: config.corner_radius,
        specular: Specular {
            center_pct: shine,
            radius_px: config.highlight_radius,
            opacity: shine_opacity.clamp(0.0, 1.0),
            core_alpha: tuning.shine_core_alpha,
            falloff_pct: tuning.shine_falloff_pct,
            blend: tuning.shine_blend,
        },
        rim: RimLight {
            angle_deg: rim_angle_deg(smoothed),
            spread_deg: tuning.rim_spread_deg,
            layer_opacity: tuning.rim_layer_opacity,
        },
        caustic: tuning.caustic.then(|| Caustic {
            center_pct: Vec2::splat(100.0) - shine,
            rgba: CAUSTIC_RGBA,
        }),
    }
}

/// Pointer-side state of one glass surface.
#[derive(Clone, Debug)]
pub struct LightReactor {
    variant: LightVariant,
    config: LightConfig,
    tracker: PointerTracker,
    smoothed: SmoothedPointer,
    shine: ReleaseFade,
}

impl LightReactor {
    pub fn new(variant: LightVariant, config: LightConfig) -> Self {
        let rates = SmoothingRates {
            engaged: VariantTuning::of(variant).engaged_lerp,
            release: LIGHT_LERP_RELEASE,
        };
        Self {
            variant,
            config,
            tracker: PointerTracker::new(),
            smoothed: SmoothedPointer::new(rates),
            shine: ReleaseFade::new(SHINE_FADE_SEC),
        }
    }

    pub fn variant(&self) -> LightVariant {
        self.variant
    }

    pub fn config(&self) -> &LightConfig {
        &self.config
    }

    pub fn pointer(&self) -> PointerState {
        self.tracker.state()
    }

    pub fn smoothed(&self) -> Vec2 {
        self.smoothed.position()
    }

    pub fn on_pointer_move(&mut self, client: Vec2, geometry: &impl SurfaceGeometry) {
        self.tracker.on_move(client, geometry);
    }

    pub fn on_pointer_leave(&mut self) {
        self.tracker.on_leave();
    }

    /// Advance smoothing and the highlight fade by `dt`, then derive lighting.
    pub fn update(&mut self, dt: f32) -> LightingState {
        let pointer = self.tracker.state();
        self.smoothed.step(&pointer);
        self.shine.step(pointer.inside, dt);
        derive_lighting(
            self.smoothed.position(),
            self.shine.eased(&EASE),
            &self.config,
            self.variant,
        )
    }
}
