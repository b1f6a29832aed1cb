//! Indicator transform between two tabs.

use crate::registry::TabSpan;
use crate::sampler::Direction;
use crate::seek::timing::lerp;

/// Translation along the axis plus a scale relative to the current tab's extent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorTransform {
    pub offset: f64,
    pub scale: f64,
}

/// How far the indicator has travelled from `current` towards `next`
///
/// Going backward at an exact integer ratio counts as complete.
#[inline]
pub fn progress(direction: Direction, ratio: f64) -> f64 {
    let fraction = ratio % 1.0;
    match direction {
        Direction::Forward => fraction,
        Direction::Backward => 1.0 - fraction,
    }
}

pub fn transform(current: TabSpan, next: TabSpan, direction: Direction, ratio: f64) -> IndicatorTransform {
    let t = progress(direction, ratio);
    IndicatorTransform {
        offset: lerp(current.start, next.start, t),
        scale: lerp(1.0, next.extent / current.extent, t),
    }
}
