use rand::Rng;
use std::time::Duration;

use crate::application::config::DelayRange;

/// Pause policy applied between two accounts of a group
pub trait Throttle: Send + Sync {
    fn next_delay(&self) -> Duration;
}

/// Uniformly random whole seconds within an inclusive range
#[derive(Debug, Clone)]
pub struct RandomDelay {
    min_secs: u64,
    max_secs: u64,
}

impl RandomDelay {
    pub fn new(range: DelayRange) -> Self {
        Self {
            min_secs: range.min_secs.min(range.max_secs),
            max_secs: range.min_secs.max(range.max_secs),
        }
    }
}

impl Throttle for RandomDelay {
    fn next_delay(&self) -> Duration {
        let secs = rand::thread_rng().gen_range(self.min_secs..=self.max_secs);
        Duration::from_secs(secs)
    }
}

/// No pause at all
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl Throttle for NoDelay {
    fn next_delay(&self) -> Duration {
        Duration::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_delay_stays_in_range() {
        let throttle = RandomDelay::new(DelayRange::default());
        for _ in 0..200 {
            let delay = throttle.next_delay();
            assert!(delay >= Duration::from_secs(5), "{:?}", delay);
            assert!(delay <= Duration::from_secs(15), "{:?}", delay);
        }
    }

    #[test]
    fn test_random_delay_single_value_range() {
        let throttle = RandomDelay::new(DelayRange {
            min_secs: 3,
            max_secs: 3,
        });
        assert_eq!(throttle.next_delay(), Duration::from_secs(3));
    }

    #[test]
    fn test_no_delay() {
        assert_eq!(NoDelay.next_delay(), Duration::ZERO);
    }
}
