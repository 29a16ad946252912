//! Time calculation helpers for animations.
//!
//! Everything takes `now` explicitly so callers (and tests) control the clock.

use std::time::{Duration, Instant};

/// Animation progress (0.0 to 1.0) at `now` for an animation started at `start`
#[inline]
pub fn progress(start: Instant, now: Instant, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    let ratio = elapsed.as_secs_f64() / duration.as_secs_f64();
    ratio.clamp(0.0, 1.0)
}

/// Check if an animation is complete at `now`
#[inline]
pub fn is_complete(start: Instant, now: Instant, duration: Duration) -> bool {
    now.saturating_duration_since(start) >= duration
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert!((lerp(0.0, 100.0, 0.0) - 0.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 0.5) - 50.0).abs() < 0.001);
        assert!((lerp(40.0, 10.0, 1.0) - 10.0).abs() < 0.001);
    }

    #[test]
    fn test_progress_zero_duration() {
        let start = Instant::now();
        assert!((progress(start, start, Duration::ZERO) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_progress_clamps() {
        let start = Instant::now();
        let d = Duration::from_millis(100);
        assert!((progress(start, start + Duration::from_millis(50), d) - 0.5).abs() < 1e-9);
        assert!((progress(start, start + Duration::from_secs(5), d) - 1.0).abs() < 1e-9);
        assert!(is_complete(start, start + d, d));
        assert!(!is_complete(start, start + Duration::from_millis(99), d));
    }
}
