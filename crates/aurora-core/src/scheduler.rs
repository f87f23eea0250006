//! Per-frame scheduling.
//!
//! `FrameClock` abstracts "call me once on the next display frame" and
//! "cancel that request". `FrameScheduler` keeps at most one request pending,
//! re-arms only after a tick has completed, and cancels the pending request
//! on `stop()`.

/// A source of display-frame callbacks.
pub trait FrameClock {
    type Handle: Copy + PartialEq + std::fmt::Debug;

    /// Ask for one callback on the next frame. `None` if the host refused.
    fn request_frame(&mut self) -> Option<Self::Handle>;

    fn cancel_frame(&mut self, handle: Self::Handle);
}

#[derive(Debug)]
pub struct FrameScheduler<C: FrameClock> {
    clock: C,
    pending: Option<C::Handle>,
    running: bool,
    in_tick: bool,
    ticks: u64,
}

impl<C: FrameClock> FrameScheduler<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            pending: None,
            running: false,
            in_tick: false,
            ticks: 0,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Ticks executed since construction.
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn pending(&self) -> Option<C::Handle> {
        self.pending
    }

    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        log::debug!("frame scheduler started");
        self.arm();
    }

    /// Idempotent. Cancels the pending request; no tick runs afterwards.
    pub fn stop(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.clock.cancel_frame(handle);
        }
        if self.running {
            log::debug!("frame scheduler stopped after {} ticks", self.ticks);
        }
        self.running = false;
    }

    fn arm(&mut self) {
        if self.pending.is_some() {
            return;
        }
        self.pending = self.clock.request_frame();
        if self.pending.is_none() {
            log::warn!("frame request refused; animation paused");
        }
    }

    /// Frame callback entry point. Runs `tick` only while started and not
    /// already inside a tick, then requests the next frame.
    ///
    /// Returns whether `tick` ran.
    pub fn on_frame(&mut self, tick: impl FnOnce()) -> bool {
        if !self.running || self.in_tick {
            return false;
        }
        self.pending = None;
        self.in_tick = true;
        tick();
        self.in_tick = false;
        self.ticks += 1;
        if self.running {
            self.arm();
        }
        true
    }
}

impl<C: FrameClock> Drop for FrameScheduler<C> {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Deterministic clock for tests and headless hosts: frames are delivered
/// only when the owner says so.
#[derive(Debug, Default)]
pub struct ManualClock {
    next_id: u32,
    pending: Option<u32>,
    requested: u32,
    cancelled: u32,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// The outstanding request, if any.
    pub fn pending(&self) -> Option<u32> {
        self.pending
    }

    pub fn requested(&self) -> u32 {
        self.requested
    }

    pub fn cancelled(&self) -> u32 {
        self.cancelled
    }

    /// Consume the outstanding request as if the display produced a frame.
    pub fn fire(&mut self) -> Option<u32> {
        self.pending.take()
    }
}

impl FrameClock for ManualClock {
    type Handle = u32;

    fn request_frame(&mut self) -> Option<u32> {
        self.next_id = self.next_id.wrapping_add(1);
        self.requested += 1;
        self.pending = Some(self.next_id);
        self.pending
    }

    fn cancel_frame(&mut self, handle: u32) {
        if self.pending == Some(handle) {
            self.pending = None;
            self.cancelled += 1;
        }
    }
}
