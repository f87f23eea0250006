use thiserror::Error;

/// Identifies which render target a write was aimed at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    Particle(usize),
    TrailSegment(usize),
    Glow,
    Surface(usize),
}

/// Failure to apply visual parameters to a render target.
///
/// Neither variant is fatal: the scene skips the target for the current tick
/// and tries again on the next one.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RenderError {
    #[error("render target {target:?} is not attached")]
    NotAttached { target: Target },
    #[error("render target {target:?} rejected write: {reason}")]
    Rejected { target: Target, reason: String },
}

/// Invalid light-surface configuration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("unrecognized option `{0}`")]
    UnknownOption(String),
    #[error("invalid value {value} for option `{option}`")]
    InvalidValue { option: &'static str, value: f64 },
}
