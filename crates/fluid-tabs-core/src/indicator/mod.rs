//! Active tab indicator geometry
//!
//! - `selector` - Hysteresis-aware resolution of the tabs in play
//! - `interpolate` - Offset and scale between two tabs

pub mod interpolate;
pub mod selector;

pub use interpolate::{transform, IndicatorTransform};
pub use selector::{resolve, InterpolationPair, WorkingTabs};

use crate::registry::TabSpan;

/// Output of one handled frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorUpdate {
    pub transform: IndicatorTransform,
    /// New base width, set only on frames where the current tab changed
    pub width: Option<f64>,
}

/// Everything the host needs to paint the indicator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorStyle {
    pub offset: f64,
    pub scale: f64,
    pub width: f64,
}

impl IndicatorStyle {
    /// Indicator resting exactly on one tab
    pub fn resting_on(tab: TabSpan) -> Self {
        Self {
            offset: tab.start,
            scale: 1.0,
            width: tab.extent,
        }
    }

    pub fn apply(&mut self, update: &IndicatorUpdate) {
        self.offset = update.transform.offset;
        self.scale = update.transform.scale;
        if let Some(width) = update.width {
            self.width = width;
        }
    }

    /// Extent the indicator visually covers
    pub fn visual_extent(&self) -> f64 {
        self.width * self.scale
    }
}

impl Default for IndicatorStyle {
    fn default() -> Self {
        Self {
            offset: 0.0,
            scale: 1.0,
            width: 0.0,
        }
    }
}
