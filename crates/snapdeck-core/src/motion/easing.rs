//! Pure easing curves mapping progress in [0, 1] to eased progress in [0, 1].

use serde::{Deserialize, Serialize};

/// Named easing curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    /// Constant speed
    Linear,
    /// Cosine ease-in-out: `0.5 * (1 - cos(pi * t))`
    #[default]
    SineInOut,
    /// Quadratic ease-in-out
    Power1InOut,
    /// Quartic ease-out, fast start and long settle
    Power3Out,
    /// CSS `ease-in-out`, i.e. `cubic-bezier(0.42, 0, 0.58, 1)`
    EaseInOut,
}

impl Easing {
    /// Apply the curve to a progress value. Input is clamped to [0, 1].
    #[inline]
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::SineInOut => sine_in_out(t),
            Easing::Power1InOut => power1_in_out(t),
            Easing::Power3Out => power3_out(t),
            Easing::EaseInOut => css_ease_in_out(t),
        }
    }
}

#[inline]
fn sine_in_out(t: f64) -> f64 {
    0.5 * (1.0 - (std::f64::consts::PI * t).cos())
}

#[inline]
fn power1_in_out(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        let inv = -2.0 * t + 2.0;
        1.0 - inv * inv / 2.0
    }
}

#[inline]
fn power3_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv * inv
}

/// One coordinate of a cubic bezier anchored at 0 and 1
#[inline]
fn bezier(s: f64, p1: f64, p2: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

fn css_ease_in_out(t: f64) -> f64 {
    const X1: f64 = 0.42;
    const X2: f64 = 0.58;
    const Y1: f64 = 0.0;
    const Y2: f64 = 1.0;

    // x(s) is monotonic on [0, 1], so bisection always converges
    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    let mut s = t;
    for _ in 0..32 {
        let x = bezier(s, X1, X2);
        if (x - t).abs() < 1e-7 {
            break;
        }
        if x < t {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    bezier(s, Y1, Y2)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 5] = [
        Easing::Linear,
        Easing::SineInOut,
        Easing::Power1InOut,
        Easing::Power3Out,
        Easing::EaseInOut,
    ];

    #[test]
    fn test_easing_boundaries() {
        for easing in ALL {
            assert!(easing.apply(0.0).abs() < 1e-3, "{:?} at t=0", easing);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-3, "{:?} at t=1", easing);
        }
    }

    #[test]
    fn test_easing_monotonic() {
        for easing in ALL {
            let mut prev = 0.0;
            for i in 0..=20 {
                let t = i as f64 / 20.0;
                let v = easing.apply(t);
                assert!(v + 1e-9 >= prev, "{:?} not monotonic at t={}", easing, t);
                prev = v;
            }
        }
    }

    #[test]
    fn test_sine_in_out_is_symmetric() {
        let e = Easing::SineInOut;
        assert!((e.apply(0.5) - 0.5).abs() < 1e-9);
        assert!((e.apply(0.25) + e.apply(0.75) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_clamps_out_of_range_progress() {
        assert_eq!(Easing::SineInOut.apply(-1.0), Easing::SineInOut.apply(0.0));
        assert!((Easing::SineInOut.apply(3.0) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_css_ease_in_out_midpoint() {
        // Symmetric control points put the midpoint at exactly half
        assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < 1e-4);
        assert!(Easing::EaseInOut.apply(0.1) < 0.1);
    }
}
