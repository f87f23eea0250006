//! Ambient particle field.
//!
//! Every particle's per-tick appearance is a pure function of elapsed
//! simulation time and the field input (smoothed pointer plus engagement).
//! Particles carry no velocity and nothing about them changes after seeding.

use crate::color::{hsl_to_rgb, Rgb};
use crate::constants::*;
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DriftAxis {
    pub phase: f32,
    pub speed: f32,
    pub amplitude: f32, // px
}

/// Immutable particle description, fixed at field construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    /// Anchor in normalized surface coordinates.
    pub base: Vec2,
    pub size: f32,
    pub rotation: f32, // degrees
    pub drift_x: DriftAxis,
    pub drift_y: DriftAxis,
    pub attract_strength: f32,
    pub base_opacity: f32,
    pub hue_base: f32,
    pub hue_speed: f32,
    pub saturation: f32,
    pub lightness: f32,
}

/// Static placement of a particle's element; written once on attach.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleLayout {
    /// Percent of surface size.
    pub left_pct: f32,
    pub top_pct: f32,
    pub width_px: f32,
    pub height_px: f32,
    pub color: Rgb,
    pub opacity: f32,
}

/// Per-tick visual parameters of one particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleVisual {
    /// Translation from the layout anchor, px.
    pub offset: Vec2,
    pub rotation_deg: f32,
    pub opacity: f32,
    pub color: Rgb,
}

/// What the field sees of the pointer on a given tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldInput {
    /// Smoothed pointer, normalized.
    pub pointer: Vec2,
    /// Scales attraction; 0 means the pointer has no influence at all.
    pub engagement: f32,
}

impl FieldInput {
    pub fn engaged(pointer: Vec2) -> Self {
        Self {
            pointer,
            engagement: 1.0,
        }
    }

    pub fn released(pointer: Vec2) -> Self {
        Self {
            pointer,
            engagement: 0.0,
        }
    }
}

/// Cubic attraction falloff: 1 at distance 0, exactly 0 at and beyond
/// `ATTRACT_RADIUS`.
#[inline]
pub fn attraction_falloff(distance: f32) -> f32 {
    let f = (1.0 - distance / ATTRACT_RADIUS).max(0.0);
    f * f * f
}

impl Particle {
    pub fn random(rng: &mut impl Rng) -> Self {
        let anchor = *HUE_ANCHORS.choose(rng).unwrap_or(&HUE_ANCHORS[0]);
        Self {
            base: Vec2::new(rng.gen(), rng.gen()),
            size: 3.0 + rng.gen::<f32>() * 6.0,
            rotation: rng.gen::<f32>() * 360.0,
            drift_x: DriftAxis::random(rng),
            drift_y: DriftAxis::random(rng),
            attract_strength: 0.25 + rng.gen::<f32>() * 0.35,
            base_opacity: 0.2 + rng.gen::<f32>() * 0.25,
            hue_base: anchor + (rng.gen::<f32>() - 0.5) * 30.0,
            hue_speed: 8.0 + rng.gen::<f32>() * 25.0,
            saturation: 50.0 + rng.gen::<f32>() * 35.0,
            lightness: 38.0 + rng.gen::<f32>() * 22.0,
        }
    }

    /// Pointer-independent oscillation, px.
    #[inline]
    pub fn drift(&self, t: f32) -> Vec2 {
        Vec2::new(
            (t * self.drift_x.speed + self.drift_x.phase).sin() * self.drift_x.amplitude,
            (t * self.drift_y.speed + self.drift_y.phase).cos() * self.drift_y.amplitude,
        )
    }

    /// Attraction offset (px) and the eased factor that produced it.
    pub fn pull(&self, input: &FieldInput) -> (Vec2, f32) {
        let d = input.pointer - self.base;
        let eased = attraction_falloff(d.length()) * input.engagement.clamp(0.0, 1.0);
        (d * (eased * self.attract_strength * ATTRACT_PULL_SCALE), eased)
    }

    /// Displacement from the anchor at time `t`.
    pub fn displacement(&self, t: f32, input: &FieldInput) -> Vec2 {
        self.drift(t) + self.pull(input).0
    }

    pub fn visual(&self, t: f32, input: &FieldInput) -> ParticleVisual {
        let (pull, eased) = self.pull(input);
        ParticleVisual {
            offset: self.drift(t) + pull,
            rotation_deg: self.rotation + t * PARTICLE_SPIN_DEG_PER_SEC,
            opacity: (self.base_opacity + eased * ATTRACT_OPACITY_BOOST).min(PARTICLE_OPACITY_MAX),
            color: hsl_to_rgb(
                self.hue_base + t * self.hue_speed,
                self.saturation,
                self.lightness,
            ),
        }
    }

    pub fn layout(&self) -> ParticleLayout {
        ParticleLayout {
            left_pct: self.base.x * 100.0,
            top_pct: self.base.y * 100.0,
            width_px: self.size * 2.2,
            height_px: self.size * 0.5,
            color: hsl_to_rgb(self.hue_base, self.saturation, self.lightness),
            opacity: self.base_opacity,
        }
    }
}

impl DriftAxis {
    fn random(rng: &mut impl Rng) -> Self {
        Self {
            phase: rng.gen::<f32>() * TAU,
            speed: 0.2 + rng.gen::<f32>() * 0.5,
            amplitude: 30.0 + rng.gen::<f32>() * 60.0,
        }
    }
}

/// Owned particle population for one attached surface.
#[derive(Clone, Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Same seed, same field.
    pub fn seeded(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let particles = (0..PARTICLE_COUNT)
            .map(|_| Particle::random(&mut rng))
            .collect();
        Self { particles }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn visuals<'a>(
        &'a self,
        t: f32,
        input: &'a FieldInput,
    ) -> impl Iterator<Item = ParticleVisual> + 'a {
        self.particles.iter().map(move |p| p.visual(t, input))
    }
}
