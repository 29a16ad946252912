use std::time::{Duration, Instant};

/// Constant-speed endless rotation
#[derive(Debug, Clone, Copy)]
pub struct Rotation {
    period: Duration,
    started: Instant,
}

impl Rotation {
    pub fn new(period: Duration, started: Instant) -> Self {
        Self { period, started }
    }

    /// Angle in degrees, in [0, 360)
    pub fn angle(&self, now: Instant) -> f64 {
        if self.period.is_zero() {
            return 0.0;
        }
        let elapsed = now.saturating_duration_since(self.started).as_secs_f64();
        let turns = elapsed / self.period.as_secs_f64();
        (turns - turns.floor()) * 360.0
    }

    /// Pick one of `frames` evenly spaced around the circle
    pub fn frame_index(&self, now: Instant, frames: usize) -> usize {
        if frames == 0 {
            return 0;
        }
        let slot = (self.angle(now) / 360.0 * frames as f64).floor() as usize;
        slot.min(frames - 1)
    }
}
