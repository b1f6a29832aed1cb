use anyhow::Result;
use tracing::{info, warn};

use fluid_tabs_core::TabsConfig;

use super::Simulation;

pub async fn run(
    config: TabsConfig,
    widths: &[f64],
    active: usize,
    target: usize,
    fps: u32,
    panel: f64,
) -> Result<()> {
    let mut sim = Simulation::new(config, widths, panel, active, fps)?;
    info!(tabs = widths.len(), active, target, fps, "Simulating click");

    let now = sim.now();
    let Some(mut ticket) = sim.tabs_mut().notify_external_value_change(target, now)? else {
        println!("tab {} is already active", target);
        return Ok(());
    };

    while ticket.try_result().is_none() {
        if !sim.frame()? {
            warn!("Frame loop went quiet before the seek finished");
            sim.tabs_mut().cancel_seek();
            break;
        }
        sim.echo()?;
    }
    sim.settle()?;

    let completed = ticket.await;
    println!("seek {}", if completed { "completed" } else { "interrupted" });
    sim.summary();
    Ok(())
}
