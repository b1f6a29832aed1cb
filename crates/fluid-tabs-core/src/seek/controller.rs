//! L3 Molecular Layer: Seek controller
//!
//! Combines easing and timing atoms to drive the panel surface to a target
//! panel. Snapping is switched off for the duration of the animation because
//! mandatory snapping fights programmatic scrolling.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::{Duration, Instant};

use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;
use tracing::debug;

use super::config::{SeekConfig, SeekConfigExt};
use super::easing::{EasingType, EasingTypeExt};
use super::timing::{is_complete, lerp, progress};
use crate::config::Axis;
use crate::host::ScrollSurface;

/// Largest difference between the written and the realized offset that is
/// still attributed to the surface rounding our writes
const DRIFT_TOLERANCE: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekStatus {
    /// Reached the target offset
    Completed,
    /// The user (or someone else) moved the surface mid-animation
    Interrupted,
    /// A newer seek replaced this one
    Superseded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeekOutcome {
    pub index: usize,
    pub status: SeekStatus,
}

impl SeekOutcome {
    #[inline]
    pub fn completed(&self) -> bool {
        self.status == SeekStatus::Completed
    }
}

/// Resolves to `true` once the seek reaches its target, `false` if it was
/// interrupted, superseded, or its controller went away.
#[derive(Debug)]
pub struct SeekTicket {
    rx: oneshot::Receiver<bool>,
    result: Option<bool>,
}

impl SeekTicket {
    fn new(rx: oneshot::Receiver<bool>) -> Self {
        Self { rx, result: None }
    }

    /// Non-blocking check; `None` while the seek is still running
    pub fn try_result(&mut self) -> Option<bool> {
        if self.result.is_none() {
            match self.rx.try_recv() {
                Ok(completed) => self.result = Some(completed),
                Err(TryRecvError::Closed) => self.result = Some(false),
                Err(TryRecvError::Empty) => {}
            }
        }
        self.result
    }
}

impl Future for SeekTicket {
    type Output = bool;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<bool> {
        let this = self.get_mut();
        if let Some(result) = this.result {
            return Poll::Ready(result);
        }
        Pin::new(&mut this.rx).poll(cx).map(|received| {
            let completed = received.unwrap_or(false);
            this.result = Some(completed);
            completed
        })
    }
}

/// Active seek animation state
#[derive(Debug)]
struct ActiveSeek {
    index: usize,
    start: Instant,
    from: f64,
    to: f64,
    duration: Duration,
    easing: EasingType,
    /// Offset written on the previous frame
    last_written: f64,
    reply: oneshot::Sender<bool>,
}

/// Seek controller
///
/// Call `seek_to()` to begin, then `advance()` every frame until it returns
/// an outcome. Dropping the controller resolves pending tickets as `false`.
#[derive(Debug)]
pub struct SeekController {
    config: SeekConfig,
    axis: Axis,
    active: Option<ActiveSeek>,
}

impl SeekController {
    pub fn new(config: SeekConfig, axis: Axis) -> Self {
        Self {
            config,
            axis,
            active: None,
        }
    }

    pub fn config(&self) -> &SeekConfig {
        &self.config
    }

    #[inline]
    pub fn is_seeking(&self) -> bool {
        self.active.is_some()
    }

    /// Index of the panel currently being sought
    pub fn target(&self) -> Option<usize> {
        self.active.as_ref().map(|seek| seek.index)
    }

    /// Start animating towards panel `index`.
    ///
    /// A seek already in flight is superseded: its ticket resolves `false`
    /// and snapping stays off for the new animation.
    pub fn seek_to<S>(&mut self, index: usize, surface: &mut S, now: Instant) -> SeekTicket
    where
        S: ScrollSurface + ?Sized,
    {
        if let Some(previous) = self.active.take() {
            debug!(index = previous.index, "Seek superseded");
            let _ = previous.reply.send(false);
        }

        let from = surface.offset(self.axis);
        let to = index as f64 * surface.extent(self.axis);
        let duration = self.config.duration_for(to - from);
        let (reply, rx) = oneshot::channel();

        surface.set_snapping(false);

        debug!(
            index,
            from,
            to,
            duration_ms = duration.as_millis() as u64,
            "Seek started"
        );

        self.active = Some(ActiveSeek {
            index,
            start: now,
            from,
            to,
            duration,
            easing: self.config.easing,
            last_written: from,
            reply,
        });

        SeekTicket::new(rx)
    }

    /// Advance the animation to `now`.
    ///
    /// Returns `Some` on the frame the seek ends, `None` while it is still
    /// running or when no seek is active.
    pub fn advance<S>(&mut self, surface: &mut S, now: Instant) -> Option<SeekOutcome>
    where
        S: ScrollSurface + ?Sized,
    {
        let seek = self.active.as_mut()?;

        if self.config.cancel_on_user_action && surface.is_user_interacting() {
            return self.finish(surface, SeekStatus::Interrupted);
        }

        let realized = surface.offset(self.axis);
        if (realized - seek.last_written).abs() > DRIFT_TOLERANCE {
            debug!(
                expected = seek.last_written,
                realized, "Surface moved under the seek"
            );
            return self.finish(surface, SeekStatus::Interrupted);
        }

        if is_complete(seek.start, now, seek.duration) {
            return self.finish(surface, SeekStatus::Completed);
        }

        let t = seek.easing.apply(progress(seek.start, now, seek.duration));
        let position = lerp(seek.from, seek.to, t);
        surface.set_offset(self.axis, position);
        seek.last_written = position;
        None
    }

    /// Stop the active seek where it is
    pub fn interrupt<S>(&mut self, surface: &mut S) -> Option<SeekOutcome>
    where
        S: ScrollSurface + ?Sized,
    {
        self.active.as_ref()?;
        self.finish(surface, SeekStatus::Interrupted)
    }

    fn finish<S>(&mut self, surface: &mut S, status: SeekStatus) -> Option<SeekOutcome>
    where
        S: ScrollSurface + ?Sized,
    {
        let seek = self.active.take()?;
        let completed = status == SeekStatus::Completed;

        if completed {
            surface.set_offset(self.axis, seek.to);
        }
        surface.set_snapping(true);

        // Re-enabling snapping can shift the realized offset on some platforms
        if completed && self.config.reassert_offset {
            surface.set_offset(self.axis, seek.to);
        }

        debug!(index = seek.index, ?status, "Seek finished");
        let _ = seek.reply.send(completed);

        Some(SeekOutcome {
            index: seek.index,
            status,
        })
    }
}
