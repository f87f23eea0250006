// Host-side tests for the particle field: falloff, purity and seeding.

use aurora_core::*;
use glam::Vec2;

#[test]
fn falloff_is_one_at_zero_and_zero_at_radius() {
    assert_eq!(attraction_falloff(0.0), 1.0);
    assert_eq!(attraction_falloff(ATTRACT_RADIUS), 0.0);
    assert_eq!(attraction_falloff(0.61), 0.0);
    assert_eq!(attraction_falloff(5.0), 0.0);
    let half = attraction_falloff(ATTRACT_RADIUS * 0.5);
    assert!((half - 0.125).abs() < 1e-6);
}

#[test]
fn falloff_decreases_with_distance() {
    let mut prev = attraction_falloff(0.0);
    for i in 1..=60 {
        let f = attraction_falloff(i as f32 * 0.01);
        assert!(f <= prev);
        prev = f;
    }
}

#[test]
fn field_has_fixed_population() {
    let field = ParticleField::seeded(7);
    assert_eq!(field.len(), PARTICLE_COUNT);
    assert!(!field.is_empty());
}

#[test]
fn same_seed_same_field_different_seed_different_field() {
    let a = ParticleField::seeded(1234);
    let b = ParticleField::seeded(1234);
    let c = ParticleField::seeded(4321);
    assert_eq!(a.particles(), b.particles());
    assert_ne!(a.particles(), c.particles());
}

#[test]
fn generated_particles_stay_in_documented_ranges() {
    let field = ParticleField::seeded(99);
    for p in field.particles() {
        assert!((0.0..1.0).contains(&p.base.x) && (0.0..1.0).contains(&p.base.y));
        assert!((3.0..=9.0).contains(&p.size));
        assert!((0.2..=0.7).contains(&p.drift_x.speed));
        assert!((30.0..=90.0).contains(&p.drift_y.amplitude));
        assert!((0.25..=0.6).contains(&p.attract_strength));
        assert!((0.2..=0.45).contains(&p.base_opacity));
        assert!((8.0..=33.0).contains(&p.hue_speed));
        assert!((50.0..=85.0).contains(&p.saturation));
        assert!((38.0..=60.0).contains(&p.lightness));
    }
}

#[test]
fn released_pointer_gives_pure_drift() {
    let field = ParticleField::seeded(5);
    let t = 3.7;
    for p in field.particles() {
        // pointer right on top of the particle: maximum possible pull if engaged
        let input = FieldInput::released(p.base);
        assert_eq!(p.displacement(t, &input), p.drift(t));
        assert_eq!(p.pull(&input).1, 0.0);
    }
}

#[test]
fn pointer_outside_radius_gives_pure_drift() {
    let field = ParticleField::seeded(5);
    let t = 1.25;
    for p in field.particles() {
        let far = p.base + Vec2::new(ATTRACT_RADIUS + 0.01, 0.0);
        let input = FieldInput::engaged(far);
        assert_eq!(p.displacement(t, &input), p.drift(t));
    }
}

#[test]
fn engaged_pointer_pulls_toward_itself() {
    let field = ParticleField::seeded(5);
    let p = &field.particles()[0];
    let pointer = p.base + Vec2::new(0.1, -0.05);
    let (pull, eased) = p.pull(&FieldInput::engaged(pointer));
    assert!(eased > 0.0 && eased < 1.0);
    assert!(pull.x > 0.0 && pull.y < 0.0);
}

#[test]
fn displacement_is_bit_identical_for_identical_inputs() {
    let field = ParticleField::seeded(77);
    let input = FieldInput {
        pointer: Vec2::new(0.31, 0.72),
        engagement: 0.6,
    };
    for t in [0.016_f32, 1.0, 12.5, 301.9] {
        for p in field.particles() {
            let a = p.visual(t, &input);
            let b = p.visual(t, &input);
            assert_eq!(a.offset.x.to_bits(), b.offset.x.to_bits());
            assert_eq!(a.offset.y.to_bits(), b.offset.y.to_bits());
            assert_eq!(a.opacity.to_bits(), b.opacity.to_bits());
            assert_eq!(a.rotation_deg.to_bits(), b.rotation_deg.to_bits());
            assert_eq!(a.color, b.color);
        }
    }
}

#[test]
fn opacity_is_capped() {
    let field = ParticleField::seeded(3);
    for p in field.particles() {
        let v = p.visual(2.0, &FieldInput::engaged(p.base));
        assert!(v.opacity <= PARTICLE_OPACITY_MAX);
        assert!(v.opacity >= p.base_opacity.min(PARTICLE_OPACITY_MAX));
    }
}

#[test]
fn rotation_and_hue_advance_with_time() {
    let field = ParticleField::seeded(3);
    let p = &field.particles()[10];
    let input = FieldInput::released(Vec2::splat(0.5));
    let a = p.visual(0.0, &input);
    let b = p.visual(10.0, &input);
    assert!((b.rotation_deg - a.rotation_deg - 10.0 * PARTICLE_SPIN_DEG_PER_SEC).abs() < 1e-3);
    assert_eq!(a.color, hsl_to_rgb(p.hue_base, p.saturation, p.lightness));
}

#[test]
fn layout_is_a_dash_anchored_at_base() {
    let field = ParticleField::seeded(8);
    let p = &field.particles()[0];
    let layout = p.layout();
    assert!((layout.left_pct - p.base.x * 100.0).abs() < 1e-4);
    assert!((layout.width_px - p.size * 2.2).abs() < 1e-4);
    assert!((layout.height_px - p.size * 0.5).abs() < 1e-4);
    assert_eq!(layout.opacity, p.base_opacity);
}

#[test]
fn field_visuals_yield_one_per_particle() {
    let field = ParticleField::seeded(8);
    let input = FieldInput::engaged(Vec2::new(0.5, 0.5));
    assert_eq!(field.visuals(1.0, &input).count(), PARTICLE_COUNT);
}
