// Host-side tests for frame scheduling and the per-tick scene pipeline.
// Frames are driven by `ManualClock`; writes are captured by a recording sink.

use aurora_core::*;
use glam::Vec2;

#[derive(Default)]
struct RecordingSink {
    writes: usize,
    particles: Vec<(usize, ParticleVisual)>,
    segments: Vec<(usize, TrailSegment)>,
    lighting: Vec<(SurfaceId, LightingState)>,
    glows: Vec<GlowParams>,
    // particle indices that are not mounted yet
    missing_particles: usize,
}

impl VisualSink for RecordingSink {
    fn particle(&mut self, index: usize, visual: &ParticleVisual) -> Result<(), RenderError> {
        if index < self.missing_particles {
            return Err(RenderError::NotAttached {
                target: Target::Particle(index),
            });
        }
        self.writes += 1;
        self.particles.push((index, *visual));
        Ok(())
    }

    fn trail_segment(
        &mut self,
        index: usize,
        segment: &TrailSegment,
    ) -> Result<(), RenderError> {
        self.writes += 1;
        self.segments.push((index, *segment));
        Ok(())
    }

    fn glow(&mut self, glow: &GlowParams) -> Result<(), RenderError> {
        self.writes += 1;
        self.glows.push(*glow);
        Ok(())
    }

    fn lighting(
        &mut self,
        surface: SurfaceId,
        lighting: &LightingState,
    ) -> Result<(), RenderError> {
        self.writes += 1;
        self.lighting.push((surface, *lighting));
        Ok(())
    }
}

fn viewport() -> SurfaceBounds {
    SurfaceBounds::new(0.0, 0.0, 1000.0, 800.0)
}

const WRITES_PER_TICK: usize = TRAIL_SEGMENTS + PARTICLE_COUNT + 1;

#[test]
fn scheduler_requests_one_frame_at_a_time() {
    let mut scheduler = FrameScheduler::new(ManualClock::new());
    assert!(!scheduler.on_frame(|| panic!("ticked before start")));

    scheduler.start();
    scheduler.start();
    assert_eq!(scheduler.clock().requested(), 1);
    assert!(scheduler.pending().is_some());

    let mut ran = 0;
    assert!(scheduler.on_frame(|| ran += 1));
    assert_eq!(ran, 1);
    assert_eq!(scheduler.ticks(), 1);
    // re-armed only after the tick completed
    assert_eq!(scheduler.clock().requested(), 2);
}

#[test]
fn stop_cancels_pending_request_and_is_idempotent() {
    let mut scheduler = FrameScheduler::new(ManualClock::new());
    scheduler.start();
    scheduler.stop();
    assert!(!scheduler.is_running());
    assert_eq!(scheduler.clock().cancelled(), 1);
    assert_eq!(scheduler.clock().pending(), None);

    scheduler.stop();
    assert_eq!(scheduler.clock().cancelled(), 1);
    assert!(!scheduler.on_frame(|| panic!("ticked after stop")));
}

#[test]
fn manual_clock_fire_consumes_request() {
    let mut scheduler = FrameScheduler::new(ManualClock::new());
    scheduler.start();
    let handle = scheduler.clock_mut().fire();
    assert!(handle.is_some());
    assert!(scheduler.on_frame(|| {}));
    assert!(scheduler.clock().pending().is_some());
}

#[test]
fn stopped_animator_never_writes_again() {
    let scene = AuroraScene::new(&SceneConfig::default());
    let mut animator = Animator::new(ManualClock::new(), scene, RecordingSink::default());
    animator.start();
    for _ in 0..3 {
        assert!(animator.on_frame());
    }
    let writes = animator.sink().writes;
    assert_eq!(writes, 3 * WRITES_PER_TICK);

    animator.stop();
    animator.stop();
    for _ in 0..10 {
        assert!(!animator.on_frame());
    }
    assert_eq!(animator.sink().writes, writes);
    assert_eq!(animator.scheduler().clock().pending(), None);
}

#[test]
fn tick_advances_fixed_step_in_documented_order() {
    let mut scene = AuroraScene::new(&SceneConfig::default());
    let mut sink = RecordingSink::default();
    let report = scene.tick(&mut sink);
    assert_eq!(scene.time(), FIXED_STEP_SEC);
    assert_eq!(report.written, WRITES_PER_TICK);
    assert_eq!(report.skipped, 0);
    assert_eq!(sink.segments.len(), TRAIL_SEGMENTS);
    assert_eq!(sink.particles.len(), PARTICLE_COUNT);
    assert_eq!(sink.glows.len(), 1);

    scene.tick(&mut sink);
    assert!((scene.time() - 2.0 * FIXED_STEP_SEC).abs() < 1e-7);
}

#[test]
fn missing_targets_are_skipped_and_retried() {
    let mut scene = AuroraScene::new(&SceneConfig::default());
    let mut sink = RecordingSink {
        missing_particles: 5,
        ..Default::default()
    };
    let report = scene.tick(&mut sink);
    assert_eq!(report.skipped, 5);
    assert_eq!(report.written, WRITES_PER_TICK - 5);

    sink.missing_particles = 0;
    let report = scene.tick(&mut sink);
    assert_eq!(report.skipped, 0);
    assert_eq!(report.written, WRITES_PER_TICK);
}

#[test]
fn untouched_scene_shows_pure_drift() {
    let mut scene = AuroraScene::new(&SceneConfig::default());
    let mut sink = RecordingSink::default();
    scene.tick(&mut sink);
    let t = scene.time();
    for (i, v) in &sink.particles {
        let p = &scene.field().particles()[*i];
        assert_eq!(v.offset, p.drift(t));
    }
}

#[test]
fn attraction_releases_completely_after_pointer_leaves() {
    let mut scene = AuroraScene::new(&SceneConfig::default());
    let mut sink = RecordingSink::default();
    scene.on_pointer_move(Vec2::new(500.0, 400.0), &viewport());
    for _ in 0..60 {
        scene.tick(&mut sink);
    }
    assert_eq!(scene.field_input().engagement, 1.0);

    scene.on_pointer_leave();
    scene.tick(&mut sink);
    let engagement = scene.field_input().engagement;
    assert!(engagement > 0.0 && engagement < 1.0, "released instantly");

    for _ in 0..40 {
        scene.tick(&mut sink);
    }
    let input = scene.field_input();
    assert_eq!(input.engagement, 0.0);
    let t = scene.time();
    for p in scene.field().particles() {
        assert_eq!(p.displacement(t, &input), p.drift(t));
    }
}

#[test]
fn trail_head_chases_raw_pixels_not_smoothed_pointer() {
    let mut scene = AuroraScene::new(&SceneConfig::default());
    let mut sink = RecordingSink::default();
    scene.on_pointer_move(Vec2::new(300.0, 200.0), &viewport());
    for _ in 0..400 {
        scene.tick(&mut sink);
    }
    let head = scene.trail().nodes()[0].position;
    assert!((head - Vec2::new(300.0, 200.0)).length() < 0.05);

    // leaving keeps the last pixel position as the trail target
    scene.on_pointer_leave();
    for _ in 0..50 {
        scene.tick(&mut sink);
    }
    let head = scene.trail().nodes()[0].position;
    assert!((head - Vec2::new(300.0, 200.0)).length() < 0.05);
}

#[test]
fn smoothed_pointer_moves_continuously() {
    let mut scene = AuroraScene::new(&SceneConfig::default());
    let mut sink = RecordingSink::default();
    scene.on_pointer_move(Vec2::new(1000.0, 800.0), &viewport());
    let mut prev = scene.smoothed_pointer();
    for _ in 0..100 {
        scene.tick(&mut sink);
        let now = scene.smoothed_pointer();
        assert!((now - prev).length() < 0.05);
        prev = now;
    }
}

#[test]
fn surfaces_get_their_own_lighting_and_stop_after_removal() {
    let mut scene = AuroraScene::new(&SceneConfig::default());
    let mut sink = RecordingSink::default();
    let frosted = scene.add_surface(
        LightVariant::Frosted,
        LightConfig::for_variant(LightVariant::Frosted),
    );
    let tinted = scene.add_surface(
        LightVariant::Tinted,
        LightConfig::for_variant(LightVariant::Tinted),
    );
    assert_ne!(frosted, tinted);

    let card = SurfaceBounds::new(100.0, 100.0, 200.0, 200.0);
    scene
        .surface_mut(tinted)
        .expect("tinted surface")
        .on_pointer_move(Vec2::new(200.0, 200.0), &card);

    scene.tick(&mut sink);
    assert_eq!(sink.lighting.len(), 2);
    let lit: Vec<_> = sink
        .lighting
        .iter()
        .map(|(id, l)| (*id, l.specular.opacity))
        .collect();
    assert_eq!(lit, vec![(frosted, 0.0), (tinted, 1.0)]);

    assert!(scene.remove_surface(frosted));
    assert!(!scene.remove_surface(frosted));
    assert!(scene.surface(frosted).is_none());
    sink.lighting.clear();
    scene.tick(&mut sink);
    assert_eq!(sink.lighting.len(), 1);
    assert_eq!(sink.lighting[0].0, tinted);
}

#[test]
fn scenes_do_not_share_state() {
    let mut a = AuroraScene::new(&SceneConfig::default());
    let mut b = AuroraScene::new(&SceneConfig::default());
    let mut sink = RecordingSink::default();
    a.on_pointer_move(Vec2::new(900.0, 100.0), &viewport());
    for _ in 0..20 {
        a.tick(&mut sink);
        b.tick(&mut sink);
    }
    assert_eq!(b.smoothed_pointer(), Vec2::splat(0.5));
    assert_ne!(a.smoothed_pointer(), b.smoothed_pointer());
    assert_eq!(a.field().particles(), b.field().particles());
}

#[test]
fn glow_springs_toward_pointer() {
    let mut glow = AmbientGlow::default();
    let target = Vec2::new(0.8, 0.2);
    let first = glow.update(target, 0.0, FIXED_STEP_SEC);
    assert!(first.center.x > 0.5 && first.center.x < 0.51);
    assert_eq!(first.inner.hue, 210.0);
    for i in 0..1250 {
        glow.update(target, i as f32 * FIXED_STEP_SEC, FIXED_STEP_SEC);
    }
    assert!((glow.position() - target).length() < 1e-3);
}

#[test]
fn idle_trail_rests_at_its_origin() {
    let origin = Vec2::new(400.0, 300.0);
    let config = SceneConfig {
        trail_origin: origin,
        ..SceneConfig::default()
    };
    let mut scene = AuroraScene::new(&config);
    let mut sink = RecordingSink::default();
    for _ in 0..200 {
        scene.tick(&mut sink);
    }
    for node in scene.trail().nodes() {
        assert!((node.position - origin).length() < 1e-3);
    }
    assert_eq!(scene.pointer().pixel, origin);
}

#[test]
fn attraction_ramps_in_after_pointer_enters() {
    let mut scene = AuroraScene::new(&SceneConfig::default());
    let mut sink = RecordingSink::default();
    for _ in 0..10 {
        scene.tick(&mut sink);
    }
    let mut prev: Vec<Vec2> = scene
        .field()
        .particles()
        .iter()
        .map(|p| p.pull(&scene.field_input()).0)
        .collect();

    // the smoothed pointer already rests at center, so only engagement changes
    scene.on_pointer_move(Vec2::new(500.0, 400.0), &viewport());
    let mut max_jump = 0.0_f32;
    for _ in 0..60 {
        scene.tick(&mut sink);
        let input = scene.field_input();
        for (p, last) in scene.field().particles().iter().zip(prev.iter_mut()) {
            let pull = p.pull(&input).0;
            max_jump = max_jump.max((pull - *last).length());
            *last = pull;
        }
    }
    assert_eq!(scene.field_input().engagement, 1.0);
    assert!(max_jump < 3.0, "pull jumped {max_jump}px in one tick");
}
