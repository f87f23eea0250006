//! `requestAnimationFrame` as a `FrameClock`.

use aurora_core::{FrameClock, FIXED_STEP_SEC};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Shared slot for the frame callback. Cleared on detach to release the
/// closure and everything it captures.
pub type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub struct RafClock {
    window: web::Window,
    slot: FrameSlot,
}

impl RafClock {
    pub fn new(window: web::Window, slot: FrameSlot) -> Self {
        Self { window, slot }
    }
}

impl FrameClock for RafClock {
    type Handle = i32;

    fn request_frame(&mut self) -> Option<i32> {
        let slot = self.slot.borrow();
        let callback = slot.as_ref()?;
        self.window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .map_err(|e| log::warn!("requestAnimationFrame failed: {:?}", e))
            .ok()
    }

    fn cancel_frame(&mut self, handle: i32) {
        if let Err(e) = self.window.cancel_animation_frame(handle) {
            log::warn!("cancelAnimationFrame failed: {:?}", e);
        }
    }
}

/// Compares simulated time against the wall clock. The simulation keeps its
/// fixed step regardless; drift is only reported.
pub struct FramePacing {
    started: Instant,
    frames: u64,
    report_every: u64,
}

impl FramePacing {
    pub fn new(report_every: u64) -> Self {
        Self {
            started: Instant::now(),
            frames: 0,
            report_every: report_every.max(1),
        }
    }

    pub fn record(&mut self) {
        self.frames += 1;
        if self.frames % self.report_every != 0 {
            return;
        }
        let wall = self.started.elapsed().as_secs_f32();
        let simulated = self.frames as f32 * FIXED_STEP_SEC;
        log::debug!(
            "pacing: {} frames, simulated {:.2}s, wall {:.2}s, drift {:+.2}s",
            self.frames,
            simulated,
            wall,
            simulated - wall
        );
    }
}
