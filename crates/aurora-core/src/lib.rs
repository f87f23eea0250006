pub mod color;
pub mod config;
pub mod constants;
pub mod easing;
pub mod error;
pub mod glow;
pub mod light;
pub mod particles;
pub mod pointer;
pub mod scene;
pub mod scheduler;
pub mod trail;

pub use color::*;
pub use config::*;
pub use constants::*;
pub use easing::{CubicBezier, ReleaseFade, EASE, EASE_IN_OUT};
pub use error::*;
pub use glow::*;
pub use light::*;
pub use particles::*;
pub use pointer::*;
pub use scene::*;
pub use scheduler::*;
pub use trail::*;
