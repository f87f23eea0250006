//! Spring-damper cursor trail.
//!
//! A fixed chain of nodes; the head chases the raw pointer pixel position and
//! every other node chases its predecessor. Integration is semi-implicit
//! Euler with a fixed step, processed strictly front to back so each node
//! follows the position its predecessor reached on the same tick.

use crate::color::{hsl_to_rgb, Rgb};
use crate::constants::*;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct TrailNode {
    pub position: Vec2, // px
    pub velocity: Vec2, // px/s
}

impl TrailNode {
    /// One semi-implicit Euler step toward `target`.
    #[inline]
    pub fn integrate(&mut self, target: Vec2, spring: &Spring, dt: f32) {
        let force = -spring.stiffness * (self.position - target) - spring.damping * self.velocity;
        self.velocity += force * dt;
        self.position += self.velocity * dt;
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    pub stiffness: f32,
    pub damping: f32,
}

impl Default for Spring {
    fn default() -> Self {
        Self {
            stiffness: TRAIL_STIFFNESS,
            damping: TRAIL_DAMPING,
        }
    }
}

/// Per-tick visual parameters of one trail segment.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct TrailSegment {
    /// Midpoint between the node and the point it follows, px.
    pub center: Vec2,
    pub length: f32,
    pub thickness: f32,
    pub angle_deg: f32,
    pub opacity: f32,
    pub color: Rgb,
}

impl TrailSegment {
    /// Top-left corner of the unrotated segment box.
    #[inline]
    pub fn origin(&self) -> Vec2 {
        self.center - Vec2::new(self.length, self.thickness) * 0.5
    }
}

/// `0.5 + 0.5·sin(t·3.5 + i·0.7)`: the ripple travelling down the chain.
#[inline]
pub fn breath(t: f32, index: usize) -> f32 {
    0.5 + 0.5 * (t * TRAIL_BREATH_RATE + index as f32 * TRAIL_BREATH_PHASE_STEP).sin()
}

#[derive(Clone, Debug)]
pub struct TrailChain {
    nodes: [TrailNode; TRAIL_SEGMENTS],
    // last finite tangent angle per node, radians
    angles: [f32; TRAIL_SEGMENTS],
    spring: Spring,
}

impl TrailChain {
    /// All nodes at rest at `origin`.
    pub fn new(origin: Vec2) -> Self {
        Self::with_spring(origin, Spring::default())
    }

    pub fn with_spring(origin: Vec2, spring: Spring) -> Self {
        Self {
            nodes: [TrailNode {
                position: origin,
                velocity: Vec2::ZERO,
            }; TRAIL_SEGMENTS],
            angles: [0.0; TRAIL_SEGMENTS],
            spring,
        }
    }

    pub fn nodes(&self) -> &[TrailNode] {
        &self.nodes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The point node `index` follows: the pointer for the head, otherwise
    /// the predecessor's current position.
    #[inline]
    fn leader(&self, index: usize, head_target: Vec2) -> Vec2 {
        if index == 0 {
            head_target
        } else {
            self.nodes[index - 1].position
        }
    }

    /// Advance every node by one step of `dt` seconds.
    pub fn step(&mut self, head_target: Vec2, dt: f32) {
        for i in 0..self.nodes.len() {
            let target = self.leader(i, head_target);
            self.nodes[i].integrate(target, &self.spring, dt);
        }
    }

    /// Derive segment visuals for the current node positions.
    ///
    /// A node sitting exactly on its leader keeps the previous tick's angle.
    pub fn segments(&mut self, t: f32, head_target: Vec2) -> [TrailSegment; TRAIL_SEGMENTS] {
        let mut out = [TrailSegment::default(); TRAIL_SEGMENTS];
        for (i, seg) in out.iter_mut().enumerate() {
            let leader = self.leader(i, head_target);
            let node = self.nodes[i].position;
            let delta = node - leader;
            if delta != Vec2::ZERO && delta.is_finite() {
                self.angles[i] = delta.y.atan2(delta.x);
            }
            let b = breath(t, i);
            let opacity = TRAIL_OPACITY_BASE + b * TRAIL_OPACITY_SPAN
                - i as f32 * TRAIL_OPACITY_FALLOFF;
            *seg = TrailSegment {
                center: (node + leader) * 0.5,
                length: (TRAIL_MIN_LEN_PX + delta.length() * TRAIL_STRETCH).min(TRAIL_MAX_LEN_PX),
                thickness: TRAIL_MIN_THICKNESS_PX + b * TRAIL_THICKNESS_SPAN_PX,
                angle_deg: self.angles[i].to_degrees(),
                opacity: opacity.max(0.0),
                color: hsl_to_rgb(
                    TRAIL_BASE_HUE + i as f32 * TRAIL_HUE_STEP + t * TRAIL_HUE_SPEED,
                    60.0 + b * 20.0,
                    48.0 + b * 12.0,
                ),
            };
        }
        out
    }
}
