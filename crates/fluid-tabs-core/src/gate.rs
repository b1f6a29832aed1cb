//! Mutual exclusion between scroll-driven and click-driven tab changes.
//!
//! Every active-value change ends up in `request_seek`, whatever caused it.
//! A change caused by a click must be followed by a seek. A change caused
//! by the scroll crossing the switch threshold must not be, because the
//! scroll is already where it needs to be. The gate remembers which of the
//! two happened so the caller does not have to.

use tracing::debug;

use crate::seek::{SeekOutcome, SeekStatus};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GateState {
    /// Either trigger may fire
    #[default]
    Idle,
    /// A seek is driving the scroll; scroll-driven changes are dropped
    Seeking,
    /// The scroll just requested a value change; its seek must be skipped
    Suppressing,
}

impl GateState {
    #[inline]
    pub fn can_change_active_value(self) -> bool {
        matches!(self, GateState::Idle)
    }

    #[inline]
    pub fn can_animate_seek(self) -> bool {
        !matches!(self, GateState::Suppressing)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekPermit {
    Proceed,
    /// The scroll already caused this change
    Skip,
}

#[derive(Debug, Clone, Default)]
pub struct TransitionGate {
    state: GateState,
}

impl TransitionGate {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn state(&self) -> GateState {
        self.state
    }

    /// Scroll crossed the switch threshold.
    ///
    /// Runs `action` and returns true unless a seek is in flight or an
    /// earlier request is still waiting for the host to answer.
    pub fn request_value_change(&mut self, action: impl FnOnce()) -> bool {
        if !self.state.can_change_active_value() {
            debug!(state = ?self.state, "Value change dropped");
            return false;
        }

        action();
        self.transition(GateState::Suppressing);
        true
    }

    /// The active value changed; decide whether a seek should follow
    pub fn request_seek(&mut self) -> SeekPermit {
        if !self.state.can_animate_seek() {
            self.transition(GateState::Idle);
            return SeekPermit::Skip;
        }

        self.transition(GateState::Seeking);
        SeekPermit::Proceed
    }

    /// A seek the host started directly, outside any value change.
    ///
    /// A pending scroll-driven request stays suppressed; its echo must
    /// still be skipped.
    pub fn begin_seek(&mut self) {
        if self.state == GateState::Suppressing {
            return;
        }
        self.transition(GateState::Seeking);
    }

    /// An interrupted seek also releases the gate: the user took over the
    /// scroll, so their threshold crossings must be able to change the value.
    pub fn finish_seek(&mut self, outcome: SeekOutcome) {
        match outcome.status {
            SeekStatus::Completed | SeekStatus::Interrupted => {
                if self.state == GateState::Seeking {
                    self.transition(GateState::Idle);
                }
            }
            // The newer seek will finish for it
            SeekStatus::Superseded => {}
        }
    }

    fn transition(&mut self, next: GateState) {
        if self.state != next {
            debug!(from = ?self.state, to = ?next, "Gate transition");
        }
        self.state = next;
    }
}
