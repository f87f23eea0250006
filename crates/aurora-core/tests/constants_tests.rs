// Host-side tests for tuning constants and their mathematical relationships.

use aurora_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn trail_spring_is_underdamped_and_stable() {
    // underdamped: c^2 < 4k (unit mass)
    assert!(TRAIL_DAMPING * TRAIL_DAMPING < 4.0 * TRAIL_STIFFNESS);
    // semi-implicit Euler stays bounded while omega*dt < 2
    assert!(TRAIL_STIFFNESS.sqrt() * FIXED_STEP_SEC < 2.0);
    assert!(TRAIL_DAMPING * FIXED_STEP_SEC < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn glow_spring_is_stable() {
    let omega = (GLOW_STIFFNESS / GLOW_MASS).sqrt();
    assert!(omega * FIXED_STEP_SEC < 2.0);
    assert!(GLOW_DAMPING / GLOW_MASS * FIXED_STEP_SEC < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoothing_releases_slower_than_it_engages() {
    assert!(FIELD_LERP_RELEASE < FIELD_LERP_ENGAGED);
    assert!(LIGHT_LERP_RELEASE > 0.0 && LIGHT_LERP_RELEASE < 1.0);
    assert!(FIELD_LERP_ENGAGED > 0.0 && FIELD_LERP_ENGAGED < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn trail_geometry_bounds_are_ordered() {
    assert!(TRAIL_MAX_LEN_PX > TRAIL_MIN_LEN_PX);
    assert!(TRAIL_MIN_THICKNESS_PX > 0.0);
    assert!(TRAIL_OPACITY_BASE + TRAIL_OPACITY_SPAN <= 1.0);
    assert_eq!(TRAIL_SEGMENTS, 10);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn field_constants_are_sane() {
    assert_eq!(PARTICLE_COUNT, 80);
    assert!(ATTRACT_RADIUS > 0.0 && ATTRACT_RADIUS < 1.5);
    assert!(PARTICLE_OPACITY_MAX <= 1.0);
    assert!(HUE_ANCHORS.iter().all(|h| (0.0..360.0).contains(h)));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn hue_cycle_loops_seamlessly() {
    assert_eq!(HUE_CYCLE_KEYFRAMES.first(), HUE_CYCLE_KEYFRAMES.last());
    assert!(HUE_CYCLE_PERIOD_SEC > 0.0);
    assert!(SHINE_FADE_SEC > FIXED_STEP_SEC);
}
