//! Frame-paced sampling of the scroll position.
//!
//! Raw scroll notifications can arrive many times per frame. The sampler
//! turns them into at most one [`Sample`] per frame and keeps asking for
//! frames only while the position is still moving.

use crate::config::Axis;
use crate::host::{FrameScheduler, ScrollSurface};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// One coalesced observation of the scroll position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Raw offset along the axis
    pub position: f64,
    /// Offset divided by one panel's extent
    pub ratio: f64,
    pub direction: Direction,
}

#[derive(Debug, Clone)]
pub struct PositionSampler {
    axis: Axis,
    previous_position: f64,
    update_scheduled: bool,
    direction: Direction,
}

impl PositionSampler {
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            previous_position: 0.0,
            update_scheduled: false,
            direction: Direction::Forward,
        }
    }

    /// Direction of the most recent sample
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    pub fn is_scheduled(&self) -> bool {
        self.update_scheduled
    }

    /// Offset in units of one panel extent
    pub fn current_ratio<S: ScrollSurface + ?Sized>(&self, surface: &S) -> f64 {
        surface.offset(self.axis) / surface.extent(self.axis)
    }

    /// Raw position-changed notification
    pub fn notify<F: FrameScheduler + ?Sized>(&mut self, scheduler: &mut F) {
        if !self.update_scheduled {
            self.update_scheduled = true;
            scheduler.request_frame();
        }
    }

    /// Frame callback.
    ///
    /// Returns a sample when the position moved since the last frame and
    /// schedules the following frame. Once the position stops changing the
    /// sampler goes quiet until the next [`notify`](Self::notify).
    pub fn on_frame<S, F>(&mut self, surface: &S, scheduler: &mut F) -> Option<Sample>
    where
        S: ScrollSurface + ?Sized,
        F: FrameScheduler + ?Sized,
    {
        if !self.update_scheduled {
            return None;
        }

        let position = surface.offset(self.axis);
        if position == self.previous_position {
            self.update_scheduled = false;
            return None;
        }

        self.direction = if position >= self.previous_position {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.previous_position = position;
        scheduler.request_frame();

        Some(Sample {
            position,
            ratio: self.current_ratio(surface),
            direction: self.direction,
        })
    }

    /// Forget motion history, e.g. after the host resized the surface
    pub fn reset(&mut self, position: f64) {
        self.previous_position = position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::{FrameQueue, MemorySurface};

    #[test]
    fn test_burst_is_coalesced_into_one_frame() {
        let mut frames = FrameQueue::default();
        let mut sampler = PositionSampler::new(Axis::Horizontal);

        for _ in 0..10 {
            sampler.notify(&mut frames);
        }

        assert_eq!(frames.requested(), 1);
        assert!(sampler.is_scheduled());
    }

    #[test]
    fn test_sample_then_quiescence() {
        let mut surface = MemorySurface::new(100.0);
        let mut frames = FrameQueue::default();
        let mut sampler = PositionSampler::new(Axis::Horizontal);

        surface.scroll_to(40.0);
        sampler.notify(&mut frames);
        assert!(frames.take());

        let sample = sampler.on_frame(&surface, &mut frames).unwrap();
        assert!((sample.ratio - 0.4).abs() < 1e-9);
        assert_eq!(sample.direction, Direction::Forward);

        // Reschedules itself while moving
        assert!(frames.take());

        // No movement: stops polling
        assert!(sampler.on_frame(&surface, &mut frames).is_none());
        assert!(!frames.take());
        assert!(!sampler.is_scheduled());
    }

    #[test]
    fn test_direction_follows_position() {
        let mut surface = MemorySurface::new(100.0);
        let mut frames = FrameQueue::default();
        let mut sampler = PositionSampler::new(Axis::Horizontal);

        surface.scroll_to(150.0);
        sampler.notify(&mut frames);
        sampler.on_frame(&surface, &mut frames).unwrap();

        surface.scroll_to(120.0);
        let sample = sampler.on_frame(&surface, &mut frames).unwrap();
        assert_eq!(sample.direction, Direction::Backward);
        assert_eq!(sampler.direction(), Direction::Backward);
    }

    #[test]
    fn test_unscheduled_frame_is_ignored() {
        let mut surface = MemorySurface::new(100.0);
        let mut frames = FrameQueue::default();
        let mut sampler = PositionSampler::new(Axis::Horizontal);

        surface.scroll_to(50.0);
        assert!(sampler.on_frame(&surface, &mut frames).is_none());
        assert_eq!(frames.requested(), 0);
    }

    #[test]
    fn test_vertical_axis() {
        let mut surface = MemorySurface::new(200.0).with_axis(Axis::Vertical);
        let mut frames = FrameQueue::default();
        let mut sampler = PositionSampler::new(Axis::Vertical);

        surface.scroll_to(300.0);
        assert_eq!(surface.offset(Axis::Horizontal), 0.0);
        assert!((sampler.current_ratio(&surface) - 1.5).abs() < 1e-9);

        sampler.notify(&mut frames);
        let sample = sampler.on_frame(&surface, &mut frames).unwrap();
        assert!((sample.ratio - 1.5).abs() < 1e-9);
    }
}
