//! L4 Atomic Layer: Time calculation utilities for seek animations
//!
//! Frame timestamps are passed in by the host, so every function here is
//! pure and can be tested with synthetic instants.

use std::time::{Duration, Instant};

/// Calculate animation progress (0.0 to 1.0) at `now`
///
/// # Arguments
/// * `start` - Animation start time
/// * `now` - Timestamp of the current frame
/// * `duration` - Total animation duration
///
/// # Returns
/// Progress value clamped to [0.0, 1.0]
#[inline]
pub fn progress(start: Instant, now: Instant, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    let ratio = elapsed.as_secs_f64() / duration.as_secs_f64();
    ratio.clamp(0.0, 1.0)
}

/// Check if animation is complete at `now`
#[inline]
pub fn is_complete(start: Instant, now: Instant, duration: Duration) -> bool {
    now.saturating_duration_since(start) >= duration
}

/// Linear interpolation between two values
///
/// # Arguments
/// * `from` - Start value
/// * `to` - End value
/// * `t` - Interpolation factor [0.0, 1.0]
///
/// # Returns
/// Interpolated value
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Duration for travelling `distance`, clamped to the configured window
pub fn travel_duration(distance: f64, ms_per_1000: u64, min: Duration, max: Duration) -> Duration {
    let millis = (distance.abs() * ms_per_1000 as f64 / 1000.0).round() as u64;
    Duration::from_millis(millis).clamp(min, max)
}
