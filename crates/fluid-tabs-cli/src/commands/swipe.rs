use anyhow::{bail, Result};
use tracing::info;

use fluid_tabs_core::TabsConfig;

use super::Simulation;

pub fn run(
    config: TabsConfig,
    widths: &[f64],
    from: f64,
    to: f64,
    steps: usize,
    active: usize,
    panel: f64,
) -> Result<()> {
    if steps == 0 {
        bail!("steps must be positive");
    }

    let mut sim = Simulation::new(config, widths, panel, active, 60)?;
    info!(tabs = widths.len(), from, to, steps, "Simulating swipe");

    for step in 0..=steps {
        let ratio = from + (to - from) * step as f64 / steps as f64;
        sim.drag_to(ratio);
        sim.frame()?;
        sim.echo()?;
    }

    // Let the sampler notice the finger stopped
    sim.settle()?;
    sim.summary();
    Ok(())
}
