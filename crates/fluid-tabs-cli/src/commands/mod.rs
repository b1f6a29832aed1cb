pub mod click;
pub mod config;
pub mod swipe;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::{bail, Result};

use fluid_tabs_core::headless::{FrameQueue, MemorySurface};
use fluid_tabs_core::{FluidTabs, SeekTicket, TabSpan, TabsConfig};

/// Headless host: a memory surface, a manual frame loop and a host state
/// that accepts every value the engine asks for.
pub struct Simulation {
    tabs: FluidTabs<usize, MemorySurface, FrameQueue>,
    requests: Rc<RefCell<Vec<usize>>>,
    panel: f64,
    now: Instant,
    frame_interval: Duration,
    frames: usize,
}

impl Simulation {
    pub fn new(config: TabsConfig, widths: &[f64], panel: f64, active: usize, fps: u32) -> Result<Self> {
        if widths.is_empty() {
            bail!("at least one tab is required");
        }
        if active >= widths.len() {
            bail!("active tab {} out of range (have {} tabs)", active, widths.len());
        }
        if !(panel.is_finite() && panel > 0.0) {
            bail!("panel extent must be positive, got {}", panel);
        }
        if fps == 0 {
            bail!("fps must be positive");
        }

        let requests = Rc::new(RefCell::new(Vec::new()));
        let sink = requests.clone();
        let mut tabs = FluidTabs::new(
            config,
            MemorySurface::new(panel),
            FrameQueue::default(),
            active,
            move |value: &usize| sink.borrow_mut().push(*value),
        )?;

        let mut start = 0.0;
        for (index, width) in widths.iter().enumerate() {
            tabs.register_tab(index, TabSpan::new(start, *width))?;
            start += width;
        }
        tabs.relayout()?;
        tabs.scheduler_mut().take();

        Ok(Self {
            tabs,
            requests,
            panel,
            now: Instant::now(),
            frame_interval: Duration::from_secs_f64(1.0 / fps as f64),
            frames: 0,
        })
    }

    pub fn tabs_mut(&mut self) -> &mut FluidTabs<usize, MemorySurface, FrameQueue> {
        &mut self.tabs
    }

    pub fn now(&self) -> Instant {
        self.now
    }

    /// Move the panels as a finger would
    pub fn drag_to(&mut self, ratio: f64) {
        self.tabs.surface_mut().scroll_to(ratio * self.panel);
        self.tabs.on_scroll();
    }

    /// Run one frame if the engine asked for it; false once it went quiet
    pub fn frame(&mut self) -> Result<bool> {
        self.now += self.frame_interval;
        if !self.tabs.scheduler_mut().take() {
            return Ok(false);
        }

        self.frames += 1;
        if let Some(update) = self.tabs.on_frame(self.now)? {
            let style = self.tabs.indicator();
            let resync = match update.width {
                Some(width) => format!("  width -> {:.1}", width),
                None => String::new(),
            };
            println!(
                "frame {:>3}  ratio {:>6.3}  offset {:>8.2}  scale {:>6.3}  extent {:>7.2}{}",
                self.frames,
                self.tabs.surface().position() / self.panel,
                style.offset,
                style.scale,
                style.visual_extent(),
                resync,
            );
        }
        Ok(true)
    }

    /// Accept every value change the engine requested
    pub fn echo(&mut self) -> Result<Vec<SeekTicket>> {
        let requested: Vec<usize> = self.requests.borrow_mut().drain(..).collect();
        let mut tickets = Vec::new();
        for value in requested {
            println!("           request active tab {}", value);
            if let Some(ticket) = self.tabs.notify_external_value_change(value, self.now)? {
                tickets.push(ticket);
            }
        }
        Ok(tickets)
    }

    /// Run frames until nothing asks for another one
    pub fn settle(&mut self) -> Result<()> {
        while self.frame()? {
            self.echo()?;
        }
        Ok(())
    }

    pub fn summary(&self) {
        let style = self.tabs.indicator();
        println!(
            "active tab {}  indicator offset {:.2}  extent {:.2}  after {} frames",
            self.tabs.value(),
            style.offset,
            style.visual_extent(),
            self.frames,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simulation(active: usize) -> Simulation {
        Simulation::new(TabsConfig::default(), &[100.0, 50.0, 100.0], 100.0, active, 60).unwrap()
    }

    #[test]
    fn test_rejects_bad_setup() {
        assert!(Simulation::new(TabsConfig::default(), &[], 100.0, 0, 60).is_err());
        assert!(Simulation::new(TabsConfig::default(), &[100.0], 100.0, 1, 60).is_err());
        assert!(Simulation::new(TabsConfig::default(), &[100.0], 0.0, 0, 60).is_err());
        assert!(Simulation::new(TabsConfig::default(), &[100.0], 100.0, 0, 0).is_err());
    }

    #[test]
    fn test_swipe_moves_active_tab() {
        let mut sim = simulation(0);
        sim.drag_to(0.7);
        sim.frame().unwrap();
        let tickets = sim.echo().unwrap();

        assert!(tickets.is_empty());
        assert_eq!(*sim.tabs_mut().value(), 1);
    }

    #[tokio::test]
    async fn test_click_seek_resolves() {
        let mut sim = simulation(0);
        let now = sim.now();
        let ticket = sim
            .tabs_mut()
            .notify_external_value_change(2, now)
            .unwrap()
            .unwrap();

        sim.settle().unwrap();
        assert!(ticket.await);
        assert_eq!(sim.tabs_mut().surface().position(), 200.0);
    }
}
