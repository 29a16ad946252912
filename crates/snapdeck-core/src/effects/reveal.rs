//! Scroll-triggered reveal animations
//!
//! Each tracked element reveals once its top crosses the viewport bottom
//! (less `offset`). With `once = false` it resets after dropping back below
//! the viewport; with `mirror = true` it also resets after leaving through
//! the top.

use std::time::{Duration, Instant};

use crate::config::RevealConfig;
use crate::motion::timing::progress;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Hidden,
    Revealed { since: Instant },
}

/// Vertical extent of an element and the viewport it is observed through
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub top: f64,
    pub height: f64,
}

#[derive(Debug, Clone)]
pub struct RevealTracker {
    config: RevealConfig,
    phases: Vec<Phase>,
}

impl RevealTracker {
    pub fn new(config: RevealConfig, count: usize) -> Self {
        Self {
            config,
            phases: vec![Phase::Hidden; count],
        }
    }

    pub fn len(&self) -> usize {
        self.phases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    /// Update element `index` against the current viewport
    pub fn observe(&mut self, index: usize, element: Extent, scroll_top: f64, viewport_height: f64, now: Instant) {
        let Some(phase) = self.phases.get_mut(index) else {
            return;
        };

        let trigger = scroll_top + viewport_height - self.config.offset;
        let entered = element.top <= trigger;
        let passed_above = element.top + element.height < scroll_top;

        match *phase {
            Phase::Hidden if entered && !(passed_above && self.config.mirror) => {
                *phase = Phase::Revealed { since: now };
            }
            Phase::Revealed { .. } if !self.config.once => {
                if !entered || (self.config.mirror && passed_above) {
                    *phase = Phase::Hidden;
                }
            }
            _ => {}
        }
    }

    /// Eased reveal progress of element `index` in [0, 1]
    pub fn progress(&self, index: usize, now: Instant) -> f64 {
        match self.phases.get(index) {
            Some(Phase::Revealed { since }) => {
                let start = *since + Duration::from_millis(self.config.delay_ms);
                let t = progress(start, now, Duration::from_millis(self.config.duration_ms));
                self.config.easing.apply(t)
            }
            _ => 0.0,
        }
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        matches!(self.phases.get(index), Some(Phase::Revealed { .. }))
    }

    /// True while any revealed element is still mid-animation
    pub fn is_animating(&self, now: Instant) -> bool {
        (0..self.phases.len()).any(|idx| {
            let p = self.progress(idx, now);
            self.is_revealed(idx) && p < 1.0
        })
    }
}
