//! Endless vertical bobbing for decorative icons
//!
//! Each element travels from rest up to `-amplitude` and back (yoyo), one leg
//! per `leg` duration, eased with `power1.inOut`. Start delays are spaced by
//! `stagger` in a random order.

use std::time::{Duration, Instant};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::EffectsConfig;
use crate::motion::Easing;

const FLOAT_EASING: Easing = Easing::Power1InOut;

#[derive(Debug, Clone)]
pub struct FloatField {
    amplitude: f64,
    leg: Duration,
    delays: Vec<Duration>,
    started: Instant,
}

impl FloatField {
    pub fn new<R: Rng + ?Sized>(count: usize, config: &EffectsConfig, started: Instant, rng: &mut R) -> Self {
        let stagger = Duration::from_millis(config.float_stagger_ms);
        let mut order: Vec<usize> = (0..count).collect();
        order.shuffle(rng);

        let mut delays = vec![Duration::ZERO; count];
        for (slot, &element) in order.iter().enumerate() {
            delays[element] = stagger * slot as u32;
        }

        Self {
            amplitude: config.float_amplitude,
            leg: Duration::from_millis(config.float_duration_ms),
            delays,
            started,
        }
    }

    pub fn len(&self) -> usize {
        self.delays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.delays.is_empty()
    }

    /// Vertical offset of element `index` at `now`; negative is up
    pub fn offset(&self, index: usize, now: Instant) -> f64 {
        let Some(delay) = self.delays.get(index) else {
            return 0.0;
        };
        if self.leg.is_zero() {
            return 0.0;
        }
        let elapsed = now.saturating_duration_since(self.started + *delay);
        let legs = elapsed.as_secs_f64() / self.leg.as_secs_f64();
        let leg_index = legs.floor() as u64;
        let within = legs - legs.floor();
        let eased = FLOAT_EASING.apply(within);
        let lift = if leg_index % 2 == 0 { eased } else { 1.0 - eased };
        -self.amplitude * lift
    }

    /// Start delay assigned to element `index`
    pub fn delay(&self, index: usize) -> Option<Duration> {
        self.delays.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn config() -> EffectsConfig {
        EffectsConfig {
            float_amplitude: 12.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_yoyo_cycle() {
        let start = Instant::now();
        let mut rng = StdRng::seed_from_u64(7);
        let field = FloatField::new(1, &config(), start, &mut rng);

        assert_eq!(field.offset(0, start), 0.0);
        let half_leg = field.offset(0, start + Duration::from_millis(650));
        assert!((half_leg + 6.0).abs() < 1e-6);
        let top = field.offset(0, start + Duration::from_millis(1299));
        assert!(top < -11.9);
        let back = field.offset(0, start + Duration::from_millis(2600));
        assert!(back.abs() < 1e-6);
    }

    #[test]
    fn test_offset_stays_within_amplitude() {
        let start = Instant::now();
        let mut rng = StdRng::seed_from_u64(1);
        let field = FloatField::new(3, &config(), start, &mut rng);
        for ms in (0..6000).step_by(37) {
            for idx in 0..3 {
                let y = field.offset(idx, start + Duration::from_millis(ms));
                assert!((-12.0..=0.0).contains(&y), "offset {} out of range", y);
            }
        }
    }

    #[test]
    fn test_stagger_assigns_distinct_delays() {
        let cfg = EffectsConfig {
            float_stagger_ms: 100,
            ..config()
        };
        let mut rng = StdRng::seed_from_u64(42);
        let field = FloatField::new(4, &cfg, Instant::now(), &mut rng);
        let mut delays: Vec<u128> = (0..4).map(|i| field.delay(i).unwrap().as_millis()).collect();
        delays.sort();
        assert_eq!(delays, vec![0, 100, 200, 300]);
    }

    #[test]
    fn test_zero_stagger_moves_together() {
        let start = Instant::now();
        let mut rng = StdRng::seed_from_u64(3);
        let field = FloatField::new(3, &config(), start, &mut rng);
        let at = start + Duration::from_millis(420);
        assert_eq!(field.offset(0, at), field.offset(2, at));
    }
}
