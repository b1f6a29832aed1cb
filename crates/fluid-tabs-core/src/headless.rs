//! In-memory host for driving the engine without a rendering surface.
//!
//! Used by the `fluid-tabs` simulator and by tests.

use crate::config::Axis;
use crate::host::{FrameScheduler, ScrollSurface};

/// A scroll container that only remembers numbers.
#[derive(Debug, Clone)]
pub struct MemorySurface {
    axis: Axis,
    x: f64,
    y: f64,
    extent: f64,
    snapping: bool,
    interacting: bool,
    /// Offset shift applied whenever snapping is turned back on
    snap_drift: f64,
    snap_toggles: usize,
}

impl MemorySurface {
    /// A horizontal surface whose panels are `extent` wide
    pub fn new(extent: f64) -> Self {
        Self {
            axis: Axis::Horizontal,
            x: 0.0,
            y: 0.0,
            extent,
            snapping: true,
            interacting: false,
            snap_drift: 0.0,
            snap_toggles: 0,
        }
    }

    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    /// Emulate platforms that move the scroll offset when snapping is re-enabled
    pub fn with_snap_drift(mut self, drift: f64) -> Self {
        self.snap_drift = drift;
        self
    }

    /// Scroll along the surface's own axis, as a user drag would
    pub fn scroll_to(&mut self, offset: f64) {
        let axis = self.axis;
        self.set_offset(axis, offset);
    }

    pub fn position(&self) -> f64 {
        self.offset(self.axis)
    }

    pub fn resize(&mut self, extent: f64) {
        self.extent = extent;
    }

    pub fn set_interacting(&mut self, interacting: bool) {
        self.interacting = interacting;
    }

    pub fn is_snapping(&self) -> bool {
        self.snapping
    }

    /// How many times snapping was switched on or off
    pub fn snap_toggles(&self) -> usize {
        self.snap_toggles
    }
}

impl ScrollSurface for MemorySurface {
    fn offset(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    fn extent(&self, _axis: Axis) -> f64 {
        self.extent
    }

    fn set_offset(&mut self, axis: Axis, offset: f64) {
        match axis {
            Axis::Horizontal => self.x = offset,
            Axis::Vertical => self.y = offset,
        }
    }

    fn set_snapping(&mut self, enabled: bool) {
        if self.snapping != enabled {
            self.snap_toggles += 1;
        }
        self.snapping = enabled;
        if enabled && self.snap_drift != 0.0 {
            let axis = self.axis;
            let drifted = self.offset(axis) + self.snap_drift;
            self.set_offset(axis, drifted);
        }
    }

    fn is_user_interacting(&self) -> bool {
        self.interacting
    }
}

/// Frame scheduler that records requests for a manual frame loop.
///
/// ```ignore
/// while tabs.scheduler_mut().take() {
///     now += FRAME;
///     tabs.on_frame(now)?;
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct FrameQueue {
    requested: usize,
}

impl FrameQueue {
    /// Requests received since the last [`take`](Self::take)
    pub fn requested(&self) -> usize {
        self.requested
    }

    /// Consume pending requests; true when a frame should run
    pub fn take(&mut self) -> bool {
        let pending = self.requested > 0;
        self.requested = 0;
        pending
    }
}

impl FrameScheduler for FrameQueue {
    fn request_frame(&mut self) {
        self.requested += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_drift_applies_on_enable_only() {
        let mut surface = MemorySurface::new(100.0).with_snap_drift(-3.0);
        surface.scroll_to(200.0);

        surface.set_snapping(false);
        assert_eq!(surface.position(), 200.0);

        surface.set_snapping(true);
        assert_eq!(surface.position(), 197.0);
        assert_eq!(surface.snap_toggles(), 2);
    }

    #[test]
    fn test_frame_queue_take_resets() {
        let mut frames = FrameQueue::default();
        frames.request_frame();
        frames.request_frame();
        assert_eq!(frames.requested(), 2);
        assert!(frames.take());
        assert!(!frames.take());
    }
}
