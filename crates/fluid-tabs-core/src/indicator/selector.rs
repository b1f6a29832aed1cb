//! Which tabs are "in play" at a scroll ratio.
//!
//! ```text
//!   Scroll direction -->
//!              |----T1----|----T2----|----T3----|
//!                        ^ ^
//!                 previous   current ratio
//! ```
//!
//! The current tab only moves to a new tab when the integer part of the
//! ratio crosses a boundary in the direction of travel. A reversal inside a
//! segment keeps the previous current tab.

use crate::sampler::Direction;

/// Indices of the tab the indicator leaves and the tab it approaches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkingTabs {
    pub current: usize,
    pub next: usize,
}

/// Pair and orientation to feed the interpolator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterpolationPair {
    pub from: usize,
    pub to: usize,
    pub direction: Direction,
}

pub fn resolve(
    direction: Direction,
    ratio: f64,
    previous_tab: usize,
    previous_ratio: f64,
    tab_count: usize,
) -> WorkingTabs {
    let last = tab_count.saturating_sub(1);
    let clamp = |index: f64| (index.max(0.0) as usize).min(last);

    let whole = ratio.trunc();
    let previous_whole = previous_ratio.trunc();

    let current = match direction {
        Direction::Forward if whole > previous_whole => clamp(whole),
        Direction::Backward if whole < previous_whole || ratio.fract() == 0.0 => {
            clamp(previous_whole)
        }
        _ => previous_tab.min(last),
    };

    let next = match direction {
        Direction::Forward => clamp(ratio.ceil()),
        Direction::Backward => clamp(ratio.floor()),
    };

    WorkingTabs { current, next }
}

impl WorkingTabs {
    /// Interpolation pair for this resolution.
    ///
    /// When a reversal inside a segment leaves `current == next` at a
    /// fractional ratio, the pair runs from `current` to the opposite end of
    /// the enclosing segment instead, so the indicator keeps tracking the
    /// scroll without changing the reported current tab.
    pub fn interpolation(&self, direction: Direction, ratio: f64, tab_count: usize) -> InterpolationPair {
        if self.current != self.next || ratio.fract() == 0.0 {
            return InterpolationPair {
                from: self.current,
                to: self.next,
                direction,
            };
        }

        let last = tab_count.saturating_sub(1);
        let lower = (ratio.floor() as usize).min(last);
        let upper = (ratio.ceil() as usize).min(last);

        if self.current == lower {
            InterpolationPair {
                from: self.current,
                to: upper,
                direction: Direction::Forward,
            }
        } else {
            InterpolationPair {
                from: self.current,
                to: lower,
                direction: Direction::Backward,
            }
        }
    }
}
