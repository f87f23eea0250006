//! Scene and light-surface configuration.

use crate::constants::{FIELD_LERP_ENGAGED, FIELD_LERP_RELEASE};
use crate::error::ConfigError;
use crate::pointer::SmoothingRates;
use glam::Vec2;

#[derive(Clone, Debug)]
pub struct SceneConfig {
    /// Seed for the particle field; equal seeds give equal fields.
    pub seed: u64,
    pub background_smoothing: SmoothingRates,
    /// Where the trail chain rests before the first pointer sample, px.
    pub trail_origin: Vec2,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            background_smoothing: SmoothingRates {
                engaged: FIELD_LERP_ENGAGED,
                release: FIELD_LERP_RELEASE,
            },
            trail_origin: Vec2::ZERO,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LightVariant {
    /// Opaque white glass.
    Frosted,
    /// Sheer glass that lets the background through; adds a caustic glow.
    Tinted,
}

/// The only recognized options of a light surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightConfig {
    pub max_tilt_degrees: f32,
    pub highlight_radius: f32, // px
    pub corner_radius: f32,    // px
}

impl LightConfig {
    pub fn for_variant(variant: LightVariant) -> Self {
        match variant {
            LightVariant::Frosted => Self {
                max_tilt_degrees: 2.5,
                highlight_radius: 280.0,
                corner_radius: 24.0,
            },
            LightVariant::Tinted => Self {
                max_tilt_degrees: 3.0,
                highlight_radius: 200.0,
                corner_radius: 9999.0,
            },
        }
    }

    /// Set one option by name. Accepts camelCase, kebab-case and snake_case.
    pub fn set_option(&mut self, name: &str, value: f64) -> Result<(), ConfigError> {
        let key: String = name
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();
        let (option, slot) = match key.as_str() {
            "maxtiltdegrees" => ("maxTiltDegrees", &mut self.max_tilt_degrees),
            "highlightradius" => ("highlightRadius", &mut self.highlight_radius),
            "cornerradius" => ("cornerRadius", &mut self.corner_radius),
            _ => return Err(ConfigError::UnknownOption(name.to_string())),
        };
        let narrowed = value as f32;
        if !narrowed.is_finite() || narrowed < 0.0 {
            return Err(ConfigError::InvalidValue { option, value });
        }
        *slot = narrowed;
        Ok(())
    }

    pub fn with_options<'a>(
        variant: LightVariant,
        options: impl IntoIterator<Item = (&'a str, f64)>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::for_variant(variant);
        for (name, value) in options {
            config.set_option(name, value)?;
        }
        Ok(config)
    }
}
