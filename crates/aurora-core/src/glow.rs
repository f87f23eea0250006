//! Large soft glow that trails the pointer across the background.

use crate::color::{Hsla, HueCycle};
use crate::constants::{GLOW_DAMPING, GLOW_MASS, GLOW_RADIUS_PX, GLOW_STIFFNESS};
use glam::Vec2;

/// Radial gradient parameters for one tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlowParams {
    /// Normalized surface coordinates.
    pub center: Vec2,
    pub radius_px: f32,
    pub inner: Hsla,
    pub mid: Hsla,
    pub mid_stop_pct: f32,
    pub fade_stop_pct: f32,
}

#[derive(Clone, Debug)]
pub struct AmbientGlow {
    position: Vec2,
    velocity: Vec2,
    hue: HueCycle,
}

impl Default for AmbientGlow {
    fn default() -> Self {
        Self::new(HueCycle::default())
    }
}

impl AmbientGlow {
    pub fn new(hue: HueCycle) -> Self {
        Self {
            position: Vec2::splat(0.5),
            velocity: Vec2::ZERO,
            hue,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Spring toward `target` (normalized) and derive the glow at time `t`.
    pub fn update(&mut self, target: Vec2, t: f32, dt: f32) -> GlowParams {
        let force = -GLOW_STIFFNESS * (self.position - target) - GLOW_DAMPING * self.velocity;
        self.velocity += force / GLOW_MASS * dt;
        self.position += self.velocity * dt;

        let hue = self.hue.hue_at(t);
        GlowParams {
            center: self.position,
            radius_px: GLOW_RADIUS_PX,
            inner: Hsla {
                hue,
                saturation: 65.0,
                lightness: 55.0,
                alpha: 0.15,
            },
            mid: Hsla {
                hue,
                saturation: 55.0,
                lightness: 45.0,
                alpha: 0.06,
            },
            mid_stop_pct: 40.0,
            fade_stop_pct: 70.0,
        }
    }
}
