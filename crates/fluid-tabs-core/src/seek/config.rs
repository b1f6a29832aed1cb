//! L4 Atomic Layer: Configuration helpers for seek animations

use std::time::Duration;

pub use crate::config::{EasingType, SeekConfig};

use super::timing::travel_duration;

/// Extension trait for SeekConfig with utility methods
pub trait SeekConfigExt {
    fn min_duration(&self) -> Duration;

    fn max_duration(&self) -> Duration;

    /// Animation length for a seek covering `distance`
    fn duration_for(&self, distance: f64) -> Duration;
}

impl SeekConfigExt for SeekConfig {
    #[inline]
    fn min_duration(&self) -> Duration {
        Duration::from_millis(self.min_duration_ms)
    }

    #[inline]
    fn max_duration(&self) -> Duration {
        Duration::from_millis(self.max_duration_ms.max(self.min_duration_ms))
    }

    fn duration_for(&self, distance: f64) -> Duration {
        if distance.abs() < 0.5 {
            return Duration::ZERO;
        }
        travel_duration(
            distance,
            self.speed_ms_per_1000px,
            self.min_duration(),
            self.max_duration(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_window() {
        let config = SeekConfig::default();
        assert_eq!(config.min_duration(), Duration::from_millis(500));
        assert_eq!(config.max_duration(), Duration::from_millis(800));
    }

    #[test]
    fn test_duration_for_distance() {
        let config = SeekConfig::default();
        assert_eq!(config.duration_for(0.0), Duration::ZERO);
        assert_eq!(config.duration_for(300.0), Duration::from_millis(500));
        assert_eq!(config.duration_for(1400.0), Duration::from_millis(700));
        assert_eq!(config.duration_for(-5000.0), Duration::from_millis(800));
    }

    #[test]
    fn test_inverted_window_does_not_panic() {
        let config = SeekConfig {
            min_duration_ms: 900,
            max_duration_ms: 100,
            ..Default::default()
        };
        assert_eq!(config.duration_for(300.0), Duration::from_millis(900));
    }
}
