#![cfg(target_arch = "wasm32")]
//! Browser bindings: drives an `AuroraScene` from `requestAnimationFrame`
//! and writes its output into DOM inline styles.

pub mod clock;
pub mod dom;
pub mod events;
pub mod sink;

use aurora_core::{
    Animator, AuroraScene, LightConfig, LightVariant, SceneConfig, SurfaceId,
};
use clock::{FramePacing, FrameSlot, RafClock};
use dom::{client_pos, window_document, ElementGeometry};
use events::Listener;
use glam::Vec2;
use sink::{DomSink, GlassLayers};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

type WebAnimator = Animator<RafClock, DomSink>;

/// Frames between pacing reports at debug level.
const PACING_REPORT_FRAMES: u64 = 600;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("aurora-web loaded");
    Ok(())
}

fn js_err(e: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{e:#}"))
}

/// Run `f` against the animator if it is still alive and not already borrowed.
fn with_animator(weak: &Weak<RefCell<WebAnimator>>, f: impl FnOnce(&mut WebAnimator)) {
    let Some(animator) = weak.upgrade() else {
        return;
    };
    let Ok(mut guard) = animator.try_borrow_mut() else {
        log::trace!("event dropped: animator busy");
        return;
    };
    f(&mut guard);
}

fn light_config(variant: LightVariant, options: &JsValue) -> anyhow::Result<LightConfig> {
    if options.is_undefined() || options.is_null() {
        return Ok(LightConfig::for_variant(variant));
    }
    let object = options
        .dyn_ref::<js_sys::Object>()
        .ok_or_else(|| anyhow::anyhow!("options must be an object"))?;
    let mut pairs = Vec::new();
    for entry in js_sys::Object::entries(object).iter() {
        let entry: js_sys::Array = entry.unchecked_into();
        let name = entry
            .get(0)
            .as_string()
            .ok_or_else(|| anyhow::anyhow!("option names must be strings"))?;
        let value = entry
            .get(1)
            .as_f64()
            .ok_or_else(|| anyhow::anyhow!("option {name} must be a number"))?;
        pairs.push((name, value));
    }
    Ok(LightConfig::with_options(
        variant,
        pairs.iter().map(|(name, value)| (name.as_str(), *value)),
    )?)
}

struct Glass {
    id: SurfaceId,
    _listeners: [Listener; 2],
}

/// Everything owned by one attached instance. Dropping it detaches.
struct Attached {
    container: web::HtmlElement,
    document: web::Document,
    animator: Rc<RefCell<WebAnimator>>,
    slot: FrameSlot,
    listeners: Vec<Listener>,
    glass: Vec<Glass>,
}

impl Attached {
    fn new(container: web::HtmlElement, seed: u32) -> anyhow::Result<Self> {
        let (window, document) =
            window_document().ok_or_else(|| anyhow::anyhow!("no window/document"))?;

        let config = SceneConfig {
            seed: u64::from(seed),
            trail_origin: Vec2::new(
                container.client_width() as f32,
                container.client_height() as f32,
            ) * 0.5,
            ..SceneConfig::default()
        };
        let scene = AuroraScene::new(&config);
        let sink = DomSink::mount(&document, &container, scene.field())?;

        let slot: FrameSlot = Rc::new(RefCell::new(None));
        let animator = Rc::new(RefCell::new(Animator::new(
            RafClock::new(window, slot.clone()),
            scene,
            sink,
        )));

        let weak = Rc::downgrade(&animator);
        let mut pacing = FramePacing::new(PACING_REPORT_FRAMES);
        *slot.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            with_animator(&weak, |a| {
                if a.on_frame() {
                    pacing.record();
                }
            });
        }) as Box<dyn FnMut()>));

        let listeners = {
            let weak = Rc::downgrade(&animator);
            let surface = container.clone();
            let on_move = Listener::mouse(&container, "mousemove", move |ev| {
                with_animator(&weak, |a| {
                    a.scene_mut()
                        .on_pointer_move(client_pos(&ev), &ElementGeometry(&surface))
                });
            })?;
            let weak = Rc::downgrade(&animator);
            let on_leave = Listener::mouse(&container, "mouseleave", move |_| {
                with_animator(&weak, |a| a.scene_mut().on_pointer_leave());
            })?;
            vec![on_move, on_leave]
        };

        animator.borrow_mut().start();
        log::info!("aurora attached (seed {seed})");
        Ok(Self {
            container,
            document,
            animator,
            slot,
            listeners,
            glass: Vec::new(),
        })
    }

    fn add_glass(
        &mut self,
        el: web::HtmlElement,
        variant: LightVariant,
        options: &JsValue,
    ) -> anyhow::Result<SurfaceId> {
        let config = light_config(variant, options)?;
        let layers = GlassLayers::mount(&self.document, &el, variant, &config)?;

        let id = {
            let mut a = self.animator.borrow_mut();
            let id = a.scene_mut().add_surface(variant, config);
            a.sink_mut().add_glass(id, layers);
            id
        };

        let weak = Rc::downgrade(&self.animator);
        let surface = el.clone();
        let on_move = Listener::mouse(&el, "mousemove", move |ev| {
            with_animator(&weak, |a| {
                if let Some(reactor) = a.scene_mut().surface_mut(id) {
                    reactor.on_pointer_move(client_pos(&ev), &ElementGeometry(&surface));
                }
            });
        })?;
        let weak = Rc::downgrade(&self.animator);
        let on_leave = Listener::mouse(&el, "mouseleave", move |_| {
            with_animator(&weak, |a| {
                if let Some(reactor) = a.scene_mut().surface_mut(id) {
                    reactor.on_pointer_leave();
                }
            });
        })?;

        self.glass.push(Glass {
            id,
            _listeners: [on_move, on_leave],
        });
        Ok(id)
    }

    fn remove_glass(&mut self, id: SurfaceId) -> bool {
        let Some(pos) = self.glass.iter().position(|g| g.id == id) else {
            return false;
        };
        self.glass.remove(pos);
        let mut a = self.animator.borrow_mut();
        a.sink_mut().remove_glass(id);
        a.scene_mut().remove_surface(id)
    }
}

impl Drop for Attached {
    fn drop(&mut self) {
        self.glass.clear();
        self.listeners.clear();
        match self.animator.try_borrow_mut() {
            Ok(mut a) => {
                a.stop();
                a.sink_mut().unmount();
            }
            Err(_) => log::error!("detach while a frame is running"),
        }
        self.slot.borrow_mut().take();
        log::info!("aurora detached from <{}>", self.container.tag_name());
    }
}

/// One animated background bound to a container element.
#[wasm_bindgen]
pub struct Aurora {
    attached: Option<Attached>,
}

#[wasm_bindgen]
impl Aurora {
    /// Mount the particle field, trail and glow inside `container` and start
    /// animating. Equal seeds produce equal particle fields.
    #[wasm_bindgen(constructor)]
    pub fn new(container: web::HtmlElement, seed: u32) -> Result<Aurora, JsValue> {
        let attached = Attached::new(container, seed).map_err(js_err)?;
        Ok(Aurora {
            attached: Some(attached),
        })
    }

    /// Attach a light reactor to `el`. `options` may set `maxTiltDegrees`,
    /// `highlightRadius` and `cornerRadius`.
    #[wasm_bindgen(js_name = addGlass)]
    pub fn add_glass(
        &mut self,
        el: web::HtmlElement,
        tinted: bool,
        options: JsValue,
    ) -> Result<u32, JsValue> {
        let attached = self
            .attached
            .as_mut()
            .ok_or_else(|| JsValue::from_str("detached"))?;
        let variant = if tinted {
            LightVariant::Tinted
        } else {
            LightVariant::Frosted
        };
        let id = attached.add_glass(el, variant, &options).map_err(js_err)?;
        Ok(id.0 as u32)
    }

    #[wasm_bindgen(js_name = removeGlass)]
    pub fn remove_glass(&mut self, id: u32) -> bool {
        self.attached
            .as_mut()
            .is_some_and(|a| a.remove_glass(SurfaceId(id as usize)))
    }

    #[wasm_bindgen(getter)]
    pub fn attached(&self) -> bool {
        self.attached.is_some()
    }

    /// Frames simulated so far.
    #[wasm_bindgen(getter)]
    pub fn ticks(&self) -> u32 {
        self.attached
            .as_ref()
            .map_or(0, |a| a.animator.borrow().scheduler().ticks() as u32)
    }

    /// Stop animating and remove every element this instance created.
    /// Safe to call more than once.
    pub fn detach(&mut self) {
        self.attached.take();
    }
}
