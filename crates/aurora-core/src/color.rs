//! HSL color conversion and the looping ambient hue animation.

use crate::constants::{HUE_CYCLE_KEYFRAMES, HUE_CYCLE_PERIOD_SEC};
use crate::easing::{CubicBezier, EASE_IN_OUT};
use std::fmt;

/// 8-bit sRGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// `#rrggbb`
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Convert hue (degrees, any range), saturation and lightness (percent) to RGB.
///
/// Hue is reduced modulo 360 before anything else, so `hsl_to_rgb(370.0, s, l)`
/// and `hsl_to_rgb(10.0, s, l)` are identical for every `s`, `l`.
pub fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> Rgb {
    let h = hue.rem_euclid(360.0);
    let s = (saturation / 100.0).clamp(0.0, 1.0);
    let l = (lightness / 100.0).clamp(0.0, 1.0);
    let a = s * l.min(1.0 - l);
    let channel = |n: f32| -> u8 {
        let k = (n + h / 30.0) % 12.0;
        let c = l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
        (255.0 * c).round().clamp(0.0, 255.0) as u8
    };
    Rgb {
        r: channel(0.0),
        g: channel(8.0),
        b: channel(4.0),
    }
}

/// HSL color with alpha, kept symbolic for CSS `hsla()` output.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
    pub alpha: f32,
}

impl Hsla {
    pub fn rgb(&self) -> Rgb {
        hsl_to_rgb(self.hue, self.saturation, self.lightness)
    }
}

impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsla({:.2}, {:.0}%, {:.0}%, {})",
            self.hue.rem_euclid(360.0),
            self.saturation,
            self.lightness,
            self.alpha
        )
    }
}

/// Repeating keyframed hue animation.
///
/// Keyframes are spaced evenly across the period and every segment between
/// two keyframes is shaped by the same easing curve. Independent of pointer
/// input.
#[derive(Clone, Debug)]
pub struct HueCycle {
    keyframes: Vec<f32>,
    period_sec: f32,
    curve: CubicBezier,
}

impl Default for HueCycle {
    fn default() -> Self {
        Self::new(HUE_CYCLE_KEYFRAMES.to_vec(), HUE_CYCLE_PERIOD_SEC, EASE_IN_OUT)
    }
}

impl HueCycle {
    /// Fewer than two keyframes yields a constant hue.
    pub fn new(keyframes: Vec<f32>, period_sec: f32, curve: CubicBezier) -> Self {
        Self {
            keyframes,
            period_sec: period_sec.max(f32::EPSILON),
            curve,
        }
    }

    pub fn period_sec(&self) -> f32 {
        self.period_sec
    }

    /// Hue at elapsed time `t` seconds; wraps every period.
    pub fn hue_at(&self, t: f32) -> f32 {
        match self.keyframes.len() {
            0 => 0.0,
            1 => self.keyframes[0],
            n => {
                let segments = (n - 1) as f32;
                let phase = t.rem_euclid(self.period_sec) / self.period_sec;
                let pos = phase * segments;
                let idx = (pos.floor() as usize).min(n - 2);
                let local = self.curve.ease(pos - idx as f32);
                let (from, to) = (self.keyframes[idx], self.keyframes[idx + 1]);
                from + (to - from) * local
            }
        }
    }
}
