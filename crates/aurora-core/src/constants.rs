/// Simulation tuning constants.
///
/// Time constants, clamp limits and falloff radii live here so the physics
/// and easing code reads as formulas rather than magic numbers.

// Fixed integration step (seconds). Wall-clock delta is deliberately ignored.
pub const FIXED_STEP_SEC: f32 = 0.016;

// Particle field
pub const PARTICLE_COUNT: usize = 80;
pub const ATTRACT_RADIUS: f32 = 0.6; // normalized units
pub const ATTRACT_PULL_SCALE: f32 = 1200.0; // normalized pull -> px offset
pub const ATTRACT_OPACITY_BOOST: f32 = 0.5;
pub const PARTICLE_OPACITY_MAX: f32 = 0.75;
pub const PARTICLE_SPIN_DEG_PER_SEC: f32 = 8.0;
pub const ENGAGEMENT_RELEASE_SEC: f32 = 0.5;
pub const ENGAGEMENT_RISE_SEC: f32 = 0.5;

// Hue anchors used to seed particle color variety
pub const HUE_ANCHORS: [f32; 18] = [
    200.0, 210.0, 215.0, 220.0, 225.0, 230.0, 240.0, 250.0, 260.0, 270.0, 280.0, 290.0, 180.0,
    190.0, 30.0, 40.0, 0.0, 350.0,
];

// Background pointer smoothing (lerp factor per tick)
pub const FIELD_LERP_ENGAGED: f32 = 0.07;
pub const FIELD_LERP_RELEASE: f32 = 0.04;

// Cursor trail spring chain
pub const TRAIL_SEGMENTS: usize = 10;
pub const TRAIL_STIFFNESS: f32 = 150.0;
pub const TRAIL_DAMPING: f32 = 20.0;
pub const TRAIL_BASE_HUE: f32 = 210.0;
pub const TRAIL_HUE_STEP: f32 = 12.0; // per node
pub const TRAIL_HUE_SPEED: f32 = 15.0; // degrees per second
pub const TRAIL_BREATH_RATE: f32 = 3.5;
pub const TRAIL_BREATH_PHASE_STEP: f32 = 0.7;
pub const TRAIL_MIN_LEN_PX: f32 = 20.0;
pub const TRAIL_MAX_LEN_PX: f32 = 60.0;
pub const TRAIL_STRETCH: f32 = 0.8;
pub const TRAIL_MIN_THICKNESS_PX: f32 = 2.0;
pub const TRAIL_THICKNESS_SPAN_PX: f32 = 3.5; // 2..5.5px
pub const TRAIL_OPACITY_BASE: f32 = 0.12;
pub const TRAIL_OPACITY_SPAN: f32 = 0.22;
pub const TRAIL_OPACITY_FALLOFF: f32 = 0.025; // per node

// Light reactors
pub const LIGHT_LERP_RELEASE: f32 = 0.04;
pub const SHINE_FADE_SEC: f32 = 0.5;

// Ambient glow
pub const GLOW_STIFFNESS: f32 = 30.0;
pub const GLOW_DAMPING: f32 = 25.0;
pub const GLOW_MASS: f32 = 1.5;
pub const GLOW_RADIUS_PX: f32 = 700.0;

// Looping hue animation for the ambient glow
pub const HUE_CYCLE_KEYFRAMES: [f32; 5] = [210.0, 260.0, 195.0, 230.0, 210.0];
pub const HUE_CYCLE_PERIOD_SEC: f32 = 16.0;
