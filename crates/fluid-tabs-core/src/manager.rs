//! Keeps the tab indicator and the panel scroll position in sync.
//!
//! `FluidTabs` owns the panel surface and wires the sampler, selector,
//! interpolator, gate and seek controller together. The host drives it
//! through four calls:
//!
//! - [`on_scroll`](FluidTabs::on_scroll) from its scroll listener
//! - [`on_frame`](FluidTabs::on_frame) when the frame scheduler fires
//! - [`notify_external_value_change`](FluidTabs::notify_external_value_change)
//!   whenever its active value changes (tab click, or the echo of a change
//!   this engine requested)
//! - [`relayout`](FluidTabs::relayout) after the surface or tabs resized

use std::fmt;
use std::hash::Hash;
use std::time::Instant;

use tracing::{debug, trace};

use crate::config::TabsConfig;
use crate::gate::{GateState, SeekPermit, TransitionGate};
use crate::host::{FrameScheduler, ScrollSurface};
use crate::indicator::{self, IndicatorStyle, IndicatorUpdate};
use crate::registry::{TabGeometry, TabRegistry};
use crate::sampler::{Direction, PositionSampler, Sample};
use crate::seek::{SeekController, SeekOutcome, SeekTicket};
use crate::{Error, Result};

/// Selector state carried from one sample to the next
#[derive(Debug, Clone, Copy)]
struct Tracking {
    tab: usize,
    ratio: f64,
}

pub struct FluidTabs<V, S, F> {
    config: TabsConfig,
    registry: TabRegistry<V>,
    value: V,
    on_change: Box<dyn FnMut(&V)>,
    surface: S,
    scheduler: F,
    sampler: PositionSampler,
    seek: SeekController,
    gate: TransitionGate,
    tracking: Option<Tracking>,
    indicator: IndicatorStyle,
}

impl<V, S, F> FluidTabs<V, S, F>
where
    V: Clone + Eq + Hash + fmt::Debug,
    S: ScrollSurface,
    F: FrameScheduler,
{
    /// Create a tab group.
    ///
    /// `value` is the host's current active value. `on_change` is called
    /// with the value the scroll position wants to activate; the host
    /// answers by updating its state and calling
    /// [`notify_external_value_change`](Self::notify_external_value_change).
    pub fn new(
        config: TabsConfig,
        surface: S,
        scheduler: F,
        value: V,
        on_change: impl FnMut(&V) + 'static,
    ) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            sampler: PositionSampler::new(config.axis),
            seek: SeekController::new(config.seek.clone(), config.axis),
            config,
            registry: TabRegistry::new(),
            value,
            on_change: Box::new(on_change),
            surface,
            scheduler,
            gate: TransitionGate::new(),
            tracking: None,
            indicator: IndicatorStyle::default(),
        })
    }

    pub fn config(&self) -> &TabsConfig {
        &self.config
    }

    /// Active value as last reported by the host
    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn registry(&self) -> &TabRegistry<V> {
        &self.registry
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn scheduler_mut(&mut self) -> &mut F {
        &mut self.scheduler
    }

    /// Latest indicator style to paint
    pub fn indicator(&self) -> IndicatorStyle {
        self.indicator
    }

    pub fn gate_state(&self) -> GateState {
        self.gate.state()
    }

    pub fn is_seeking(&self) -> bool {
        self.seek.is_seeking()
    }

    /// Tab the indicator is currently anchored to
    pub fn current_tab(&self) -> Option<usize> {
        self.tracking.map(|tracking| tracking.tab)
    }

    pub fn active_index(&self) -> Result<usize> {
        self.registry
            .index_of(&self.value)
            .ok_or_else(|| Error::UnknownValue(format!("{:?}", self.value)))
    }

    pub fn register_tab(&mut self, value: V, tab: impl TabGeometry + 'static) -> Result<usize> {
        let index = self.registry.register(value, tab)?;
        self.tracking = None;
        Ok(index)
    }

    pub fn insert_tab(&mut self, index: usize, value: V, tab: impl TabGeometry + 'static) -> Result<()> {
        self.registry.insert(index, value, tab)?;
        self.tracking = None;
        Ok(())
    }

    pub fn unregister_tab(&mut self, value: &V) -> Result<usize> {
        let index = self.registry.unregister(value)?;
        self.tracking = None;
        Ok(index)
    }

    /// Raw scroll notification from the host
    pub fn on_scroll(&mut self) {
        self.sampler.notify(&mut self.scheduler);
    }

    /// Frame callback.
    ///
    /// Returns the indicator update for this frame, or `None` when nothing
    /// moved or the sample was out of range.
    pub fn on_frame(&mut self, now: Instant) -> Result<Option<IndicatorUpdate>> {
        if self.seek.is_seeking() {
            let outcome = self.seek.advance(&mut self.surface, now);
            // The seek's writes reach the sampler like any other scroll
            self.sampler.notify(&mut self.scheduler);
            match outcome {
                Some(outcome) => self.gate.finish_seek(outcome),
                None => self.scheduler.request_frame(),
            }
        }

        match self.sampler.on_frame(&self.surface, &mut self.scheduler) {
            Some(sample) => self.handle_sample(sample),
            None => Ok(None),
        }
    }

    /// The host's active value changed.
    ///
    /// Starts a seek to the new value's panel unless the change came from
    /// the scroll position itself. Returns the seek's ticket when one was
    /// started.
    pub fn notify_external_value_change(&mut self, value: V, now: Instant) -> Result<Option<SeekTicket>> {
        let index = self
            .registry
            .index_of(&value)
            .ok_or_else(|| Error::UnknownValue(format!("{:?}", value)))?;

        if value == self.value {
            return Ok(None);
        }

        debug!(?value, index, "Active value changed");
        self.value = value;

        match self.gate.request_seek() {
            SeekPermit::Skip => {
                // A host seek started while the echo was pending still owns the scroll
                if self.seek.is_seeking() {
                    self.gate.begin_seek();
                }
                Ok(None)
            }
            SeekPermit::Proceed => Ok(Some(self.start_seek(index, now))),
        }
    }

    /// Seek to a panel without changing the active value
    pub fn seek_to(&mut self, index: usize, now: Instant) -> Result<SeekTicket> {
        if index >= self.registry.len() {
            return Err(Error::MissingTab {
                index,
                len: self.registry.len(),
            });
        }

        self.gate.begin_seek();
        Ok(self.start_seek(index, now))
    }

    /// Stop an active seek where it is
    pub fn cancel_seek(&mut self) -> Option<SeekOutcome> {
        let outcome = self.seek.interrupt(&mut self.surface)?;
        self.gate.finish_seek(outcome);
        Some(outcome)
    }

    /// Re-anchor everything on the active tab after a size change
    pub fn relayout(&mut self) -> Result<IndicatorStyle> {
        let index = self.active_index()?;
        let tab = self.registry.span(index)?;

        self.cancel_seek();

        let axis = self.config.axis;
        let offset = index as f64 * self.surface.extent(axis);
        self.surface.set_offset(axis, offset);
        self.sampler.reset(offset);

        self.tracking = Some(Tracking {
            tab: index,
            ratio: index as f64,
        });
        self.indicator = IndicatorStyle::resting_on(tab);
        Ok(self.indicator)
    }

    fn start_seek(&mut self, index: usize, now: Instant) -> SeekTicket {
        let ticket = self.seek.seek_to(index, &mut self.surface, now);
        self.scheduler.request_frame();
        ticket
    }

    fn handle_sample(&mut self, sample: Sample) -> Result<Option<IndicatorUpdate>> {
        let count = self.registry.len();
        let ratio = sample.ratio;

        // Overscroll (rubber-banding) and empty groups
        if count == 0 || !ratio.is_finite() || ratio < 0.0 || ratio > (count - 1) as f64 {
            trace!(ratio, count, "Sample outside panel range discarded");
            return Ok(None);
        }

        self.evaluate_switch(ratio)?;

        let update = self.track(sample.direction, ratio)?;
        self.indicator.apply(&update);
        Ok(Some(update))
    }

    fn evaluate_switch(&mut self, ratio: f64) -> Result<()> {
        let active = self.active_index()?;
        let closest = ratio.round() as usize;

        if closest == active || (ratio - active as f64).abs() <= self.config.switch_threshold {
            return Ok(());
        }

        let value = self.registry.value_at(closest).ok_or(Error::MissingTab {
            index: closest,
            len: self.registry.len(),
        })?;

        let on_change = &mut self.on_change;
        if self.gate.request_value_change(|| (*on_change)(value)) {
            debug!(from = active, to = closest, ratio, "Scroll-driven tab change requested");
        }
        Ok(())
    }

    fn track(&mut self, direction: Direction, ratio: f64) -> Result<IndicatorUpdate> {
        let count = self.registry.len();
        let (previous, seeded) = match self.tracking {
            Some(tracking) => (tracking, true),
            None => {
                let active = self.active_index()?;
                let tracking = Tracking {
                    tab: active,
                    ratio: active as f64,
                };
                (tracking, false)
            }
        };

        let tabs = indicator::resolve(direction, ratio, previous.tab, previous.ratio, count);
        let pair = tabs.interpolation(direction, ratio, count);
        let from = self.registry.span(pair.from)?;
        let to = self.registry.span(pair.to)?;
        let transform = indicator::transform(from, to, pair.direction, ratio);

        let width = if !seeded || tabs.current != previous.tab {
            Some(self.registry.span(tabs.current)?.extent)
        } else {
            None
        };

        self.tracking = Some(Tracking {
            tab: tabs.current,
            ratio,
        });

        Ok(IndicatorUpdate { transform, width })
    }
}

impl<V: fmt::Debug, S, F> fmt::Debug for FluidTabs<V, S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FluidTabs")
            .field("value", &self.value)
            .field("registry", &self.registry)
            .field("gate", &self.gate)
            .field("tracking", &self.tracking)
            .field("indicator", &self.indicator)
            .finish_non_exhaustive()
    }
}
