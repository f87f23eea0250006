//! One attached background surface and the glass surfaces inside it.
//!
//! `AuroraScene` owns every piece of simulation state for a single attached
//! instance; nothing is shared between instances. Each `tick` advances time
//! by the fixed step and runs, in order: pointer smoothing, trail
//! integration, trail render, particle update/render, light reactors, and
//! the ambient glow.

use crate::config::{LightConfig, LightVariant, SceneConfig};
use crate::constants::{ENGAGEMENT_RELEASE_SEC, ENGAGEMENT_RISE_SEC, FIXED_STEP_SEC};
use crate::easing::ReleaseFade;
use crate::error::RenderError;
use crate::glow::{AmbientGlow, GlowParams};
use crate::light::{LightReactor, LightingState};
use crate::particles::{FieldInput, ParticleField, ParticleVisual};
use crate::pointer::{PointerState, PointerTracker, SmoothedPointer, SurfaceGeometry};
use crate::scheduler::{FrameClock, FrameScheduler};
use crate::trail::{TrailChain, TrailSegment};
use glam::Vec2;

/// Handle for a glass surface registered with a scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceId(pub usize);

/// Receives derived visual parameters and applies them to render targets.
///
/// Any error only skips that one target for the current tick.
pub trait VisualSink {
    fn particle(&mut self, index: usize, visual: &ParticleVisual) -> Result<(), RenderError>;
    fn trail_segment(&mut self, index: usize, segment: &TrailSegment)
        -> Result<(), RenderError>;
    fn glow(&mut self, glow: &GlowParams) -> Result<(), RenderError>;
    fn lighting(&mut self, surface: SurfaceId, lighting: &LightingState)
        -> Result<(), RenderError>;
}

/// Outcome of one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    pub written: usize,
    pub skipped: usize,
}

impl TickReport {
    fn record(&mut self, result: Result<(), RenderError>) {
        match result {
            Ok(()) => self.written += 1,
            Err(e) => {
                log::trace!("{e}");
                self.skipped += 1;
            }
        }
    }
}

pub struct AuroraScene {
    time: f32,
    pointer: PointerTracker,
    smoothed: SmoothedPointer,
    engagement: ReleaseFade,
    trail: TrailChain,
    field: ParticleField,
    glow: AmbientGlow,
    surfaces: Vec<(SurfaceId, LightReactor)>,
    next_surface: usize,
}

impl AuroraScene {
    pub fn new(config: &SceneConfig) -> Self {
        log::debug!("scene attached, seed={}", config.seed);
        Self {
            time: 0.0,
            pointer: PointerTracker::at_pixel(config.trail_origin),
            smoothed: SmoothedPointer::new(config.background_smoothing),
            engagement: ReleaseFade::with_rise(ENGAGEMENT_RISE_SEC, ENGAGEMENT_RELEASE_SEC),
            trail: TrailChain::new(config.trail_origin),
            field: ParticleField::seeded(config.seed),
            glow: AmbientGlow::default(),
            surfaces: Vec::new(),
            next_surface: 0,
        }
    }

    /// Elapsed simulation time, seconds.
    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer.state()
    }

    pub fn smoothed_pointer(&self) -> Vec2 {
        self.smoothed.position()
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn trail(&self) -> &TrailChain {
        &self.trail
    }

    /// What the particle field sees this tick.
    pub fn field_input(&self) -> FieldInput {
        FieldInput {
            pointer: self.smoothed.position(),
            engagement: self.engagement.level(),
        }
    }

    pub fn on_pointer_move(&mut self, client: Vec2, geometry: &impl SurfaceGeometry) {
        self.pointer.on_move(client, geometry);
    }

    pub fn on_pointer_leave(&mut self) {
        self.pointer.on_leave();
    }

    pub fn add_surface(&mut self, variant: LightVariant, config: LightConfig) -> SurfaceId {
        let id = SurfaceId(self.next_surface);
        self.next_surface += 1;
        self.surfaces.push((id, LightReactor::new(variant, config)));
        log::debug!("light surface {id:?} attached ({variant:?})");
        id
    }

    /// Stops all further lighting writes for `id`.
    pub fn remove_surface(&mut self, id: SurfaceId) -> bool {
        let before = self.surfaces.len();
        self.surfaces.retain(|(sid, _)| *sid != id);
        let removed = self.surfaces.len() != before;
        if removed {
            log::debug!("light surface {id:?} detached");
        }
        removed
    }

    pub fn surface(&self, id: SurfaceId) -> Option<&LightReactor> {
        self.surfaces.iter().find(|(sid, _)| *sid == id).map(|(_, r)| r)
    }

    pub fn surface_mut(&mut self, id: SurfaceId) -> Option<&mut LightReactor> {
        self.surfaces
            .iter_mut()
            .find(|(sid, _)| *sid == id)
            .map(|(_, r)| r)
    }

    pub fn tick(&mut self, sink: &mut impl VisualSink) -> TickReport {
        let dt = FIXED_STEP_SEC;
        self.time += dt;
        let t = self.time;
        let mut report = TickReport::default();

        let pointer = self.pointer.state();
        self.smoothed.step(&pointer);
        self.engagement.step(pointer.inside, dt);

        self.trail.step(pointer.pixel, dt);
        for (i, segment) in self.trail.segments(t, pointer.pixel).iter().enumerate() {
            report.record(sink.trail_segment(i, segment));
        }

        let input = self.field_input();
        for (i, visual) in self.field.visuals(t, &input).enumerate() {
            report.record(sink.particle(i, &visual));
        }

        for (id, reactor) in &mut self.surfaces {
            let lighting = reactor.update(dt);
            report.record(sink.lighting(*id, &lighting));
        }

        let glow = self.glow.update(pointer.normalized, t, dt);
        report.record(sink.glow(&glow));

        report
    }
}

/// A scene bound to its frame clock and render sink.
pub struct Animator<C: FrameClock, S: VisualSink> {
    scheduler: FrameScheduler<C>,
    scene: AuroraScene,
    sink: S,
    last_report: TickReport,
}

impl<C: FrameClock, S: VisualSink> Animator<C, S> {
    pub fn new(clock: C, scene: AuroraScene, sink: S) -> Self {
        Self {
            scheduler: FrameScheduler::new(clock),
            scene,
            sink,
            last_report: TickReport::default(),
        }
    }

    pub fn start(&mut self) {
        self.scheduler.start();
    }

    /// Idempotent; after it returns the sink receives no further writes.
    pub fn stop(&mut self) {
        self.scheduler.stop();
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    /// Display-frame callback. Returns whether a tick ran.
    pub fn on_frame(&mut self) -> bool {
        let Self {
            scheduler,
            scene,
            sink,
            last_report,
        } = self;
        scheduler.on_frame(|| *last_report = scene.tick(sink))
    }

    pub fn last_report(&self) -> TickReport {
        self.last_report
    }

    pub fn scheduler(&self) -> &FrameScheduler<C> {
        &self.scheduler
    }

    pub fn scene(&self) -> &AuroraScene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut AuroraScene {
        &mut self.scene
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}
