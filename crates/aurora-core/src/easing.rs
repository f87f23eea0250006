//! Cubic-bezier timing curves.
//!
//! Curves are defined the CSS way: control points (x1, y1) and (x2, y2) with
//! implicit endpoints (0, 0) and (1, 1). Evaluating a curve means solving
//! `x(s) = t` for the curve parameter `s` and returning `y(s)`.

const NEWTON_ITERATIONS: usize = 8;
const BISECTION_ITERATIONS: usize = 24;
const EPSILON: f32 = 1e-6;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

/// CSS `ease`; also the app-wide "smooth" curve.
pub const EASE: CubicBezier = CubicBezier::new(0.25, 0.1, 0.25, 1.0);
/// CSS `ease-in-out`.
pub const EASE_IN_OUT: CubicBezier = CubicBezier::new(0.42, 0.0, 0.58, 1.0);

// Polynomial coefficients (a, b, c) of `((a*s + b)*s + c)*s` for one axis.
#[inline]
fn coefficients(p1: f32, p2: f32) -> (f32, f32, f32) {
    let c = 3.0 * p1;
    let b = 3.0 * (p2 - p1) - c;
    (1.0 - c - b, b, c)
}

impl CubicBezier {
    /// `x1` and `x2` must lie in [0, 1] for the curve to be a function of time.
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    #[inline]
    fn sample_x(&self, s: f32) -> f32 {
        let (a, b, c) = coefficients(self.x1, self.x2);
        ((a * s + b) * s + c) * s
    }

    #[inline]
    fn sample_y(&self, s: f32) -> f32 {
        let (a, b, c) = coefficients(self.y1, self.y2);
        ((a * s + b) * s + c) * s
    }

    #[inline]
    fn slope_x(&self, s: f32) -> f32 {
        let (a, b, c) = coefficients(self.x1, self.x2);
        (3.0 * a * s + 2.0 * b) * s + c
    }

    fn solve_s(&self, t: f32) -> f32 {
        let mut s = t;
        for _ in 0..NEWTON_ITERATIONS {
            let err = self.sample_x(s) - t;
            if err.abs() < EPSILON {
                return s;
            }
            let d = self.slope_x(s);
            if d.abs() < EPSILON {
                break;
            }
            s -= err / d;
        }

        // Newton stalled on a flat region; bisect instead.
        let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
        s = t;
        for _ in 0..BISECTION_ITERATIONS {
            let x = self.sample_x(s);
            if (x - t).abs() < EPSILON {
                break;
            }
            if x < t {
                lo = s;
            } else {
                hi = s;
            }
            s = 0.5 * (lo + hi);
        }
        s
    }

    /// Map linear progress `t` to eased progress. `t` is clamped to [0, 1];
    /// the endpoints map exactly to 0 and 1.
    pub fn ease(&self, t: f32) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        self.sample_y(self.solve_s(t))
    }
}

/// Linear fade between 0 and 1 that rises while engaged and falls over a
/// window after release.
///
/// The specular highlight rises instantly. Particle engagement rises over its
/// own window so the pull never jumps on the first engaged tick. Both decay
/// to exactly 0 after release.
#[derive(Clone, Copy, Debug)]
pub struct ReleaseFade {
    // 0.0 rises in a single step
    rise_sec: f32,
    window_sec: f32,
    // 1.0 while fully engaged, counts down to 0.0 after release
    remaining: f32,
}

impl ReleaseFade {
    pub fn new(window_sec: f32) -> Self {
        Self::with_rise(0.0, window_sec)
    }

    pub fn with_rise(rise_sec: f32, window_sec: f32) -> Self {
        Self {
            rise_sec: rise_sec.max(0.0),
            window_sec: window_sec.max(f32::EPSILON),
            remaining: 0.0,
        }
    }

    pub fn step(&mut self, engaged: bool, dt: f32) {
        self.remaining = if !engaged {
            (self.remaining - dt / self.window_sec).max(0.0)
        } else if self.rise_sec > 0.0 {
            (self.remaining + dt / self.rise_sec).min(1.0)
        } else {
            1.0
        };
    }

    /// Linear level in [0, 1].
    #[inline]
    pub fn level(&self) -> f32 {
        self.remaining
    }

    /// Level shaped by `curve` over the fall-off.
    pub fn eased(&self, curve: &CubicBezier) -> f32 {
        1.0 - curve.ease(1.0 - self.remaining)
    }
}
