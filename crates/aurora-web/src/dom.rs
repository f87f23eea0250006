use aurora_core::{RenderError, SurfaceBounds, SurfaceGeometry, Target};
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

/// Append an absolutely positioned, pointer-transparent `div` to `parent`.
pub fn append_div(
    document: &web::Document,
    parent: &web::Element,
    class: &str,
    css: &str,
) -> anyhow::Result<web::HtmlElement> {
    let el = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    el.set_class_name(class);
    el.set_attribute(
        "style",
        &format!("position:absolute;pointer-events:none;{css}"),
    )
    .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    parent
        .append_child(&el)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(el)
}

/// Write a batch of style properties. Elements that are not in the document
/// are reported as not attached and left untouched.
pub fn set_styles(
    el: &web::HtmlElement,
    target: Target,
    props: &[(&str, &str)],
) -> Result<(), RenderError> {
    if !el.is_connected() {
        return Err(RenderError::NotAttached { target });
    }
    let style = el.style();
    for (name, value) in props {
        style
            .set_property(name, value)
            .map_err(|e| RenderError::Rejected {
                target,
                reason: format!("{name}: {e:?}"),
            })?;
    }
    Ok(())
}

#[inline]
pub fn client_pos(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Bounding rectangle of a live element, queried on demand.
pub struct ElementGeometry<'a>(pub &'a web::Element);

impl SurfaceGeometry for ElementGeometry<'_> {
    fn bounds(&self) -> Option<SurfaceBounds> {
        if !self.0.is_connected() {
            return None;
        }
        let rect = self.0.get_bounding_client_rect();
        Some(SurfaceBounds::new(
            rect.left() as f32,
            rect.top() as f32,
            rect.width() as f32,
            rect.height() as f32,
        ))
    }
}
