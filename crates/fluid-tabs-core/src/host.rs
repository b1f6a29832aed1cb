//! Capabilities the host environment provides to the engine.

use crate::config::Axis;

/// The scrollable panel container.
///
/// Offsets and extents are in the host's own units (CSS pixels, terminal
/// columns, ...). The extent is the size of one panel, which is also the
/// visible size of the container.
pub trait ScrollSurface {
    fn offset(&self, axis: Axis) -> f64;

    fn extent(&self, axis: Axis) -> f64;

    fn set_offset(&mut self, axis: Axis, offset: f64);

    /// Toggle mandatory snapping to panel boundaries
    fn set_snapping(&mut self, enabled: bool);

    /// Whether a pointer or touch currently holds the surface
    fn is_user_interacting(&self) -> bool {
        false
    }
}

/// Requests a callback on the next rendering frame.
///
/// The host answers a request by calling `FluidTabs::on_frame` once on the
/// following frame. Several requests before that frame collapse into one.
pub trait FrameScheduler {
    fn request_frame(&mut self);
}
