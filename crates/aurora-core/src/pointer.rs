//! Screen-space pointer events to surface-local coordinates.
//!
//! The tracker is a two-state machine (`inside` / `outside`). Bounds are only
//! queried when a pointer-move arrives, never per tick.

use glam::Vec2;

const CENTER: Vec2 = Vec2::new(0.5, 0.5);

/// Bounding rectangle of a render surface in screen (client) pixels.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct SurfaceBounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl SurfaceBounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// On-demand bounding-rectangle query for a surface.
pub trait SurfaceGeometry {
    /// `None` when the surface is not laid out yet.
    fn bounds(&self) -> Option<SurfaceBounds>;
}

impl SurfaceGeometry for SurfaceBounds {
    fn bounds(&self) -> Option<SurfaceBounds> {
        Some(*self)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    /// Fraction of surface size; not clamped, may leave [0, 1] near edges.
    pub normalized: Vec2,
    /// Pixels relative to the surface origin.
    pub pixel: Vec2,
    pub inside: bool,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            normalized: CENTER,
            pixel: Vec2::ZERO,
            inside: false,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct PointerTracker {
    state: PointerState,
    bounds: Option<SurfaceBounds>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tracker whose last known pixel position is `pixel` before any sample.
    pub fn at_pixel(pixel: Vec2) -> Self {
        Self {
            state: PointerState {
                pixel,
                ..PointerState::default()
            },
            bounds: None,
        }
    }

    #[inline]
    pub fn state(&self) -> PointerState {
        self.state
    }

    /// Bounds captured at the most recent pointer-move.
    #[inline]
    pub fn bounds(&self) -> Option<SurfaceBounds> {
        self.bounds
    }

    /// Record a raw pointer-move at `client` (screen pixels).
    ///
    /// Re-queries the surface geometry. With missing or zero-sized bounds the
    /// previous sample is kept so no NaN can reach the simulation.
    pub fn on_move(&mut self, client: Vec2, geometry: &impl SurfaceGeometry) {
        let Some(rect) = geometry.bounds() else {
            log::trace!("pointer move ignored: surface has no bounds");
            return;
        };
        if rect.is_degenerate() {
            log::warn!(
                "pointer move ignored: degenerate surface {}x{}",
                rect.width,
                rect.height
            );
            return;
        }
        let local = client - rect.origin();
        self.bounds = Some(rect);
        self.state = PointerState {
            normalized: local / rect.size(),
            pixel: local,
            inside: true,
        };
    }

    /// Pointer left the surface: the reference point returns to center while
    /// the pixel position stays where the pointer was last seen.
    pub fn on_leave(&mut self) {
        self.state.inside = false;
        self.state.normalized = CENTER;
    }
}

/// Per-tick lerp factors for the two tracker states.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmoothingRates {
    pub engaged: f32,
    pub release: f32,
}

impl SmoothingRates {
    #[inline]
    pub fn for_state(&self, inside: bool) -> f32 {
        if inside {
            self.engaged
        } else {
            self.release
        }
    }
}

/// Exponentially smoothed copy of `PointerState::normalized`.
///
/// Only ever moves by bounded-rate interpolation, so its path is continuous.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmoothedPointer {
    position: Vec2,
    rates: SmoothingRates,
}

impl SmoothedPointer {
    /// Starts at surface center.
    pub fn new(rates: SmoothingRates) -> Self {
        Self {
            position: CENTER,
            rates,
        }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn rates(&self) -> SmoothingRates {
        self.rates
    }

    pub fn step(&mut self, pointer: &PointerState) {
        let rate = self.rates.for_state(pointer.inside).clamp(0.0, 1.0);
        self.position += (pointer.normalized - self.position) * rate;
    }
}
