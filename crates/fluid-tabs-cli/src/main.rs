use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fluid_tabs_core::TabsConfig;

mod commands;

#[derive(Parser)]
#[command(name = "fluid-tabs")]
#[command(author, version, about = "Headless simulator for the fluid tab indicator")]
struct Cli {
    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Drag the panels from one ratio to another
    Swipe {
        /// Tab widths, comma separated
        #[arg(long, value_delimiter = ',', required = true)]
        tabs: Vec<f64>,
        /// Starting scroll ratio
        #[arg(long, default_value_t = 0.0)]
        from: f64,
        /// Final scroll ratio
        #[arg(long)]
        to: f64,
        /// Number of drag steps, one frame each
        #[arg(long, default_value_t = 10)]
        steps: usize,
        /// Index of the initially active tab
        #[arg(long, default_value_t = 0)]
        active: usize,
        /// Panel extent in pixels
        #[arg(long, default_value_t = 100.0)]
        panel: f64,
    },
    /// Click a tab and watch the seek
    Click {
        /// Tab widths, comma separated
        #[arg(long, value_delimiter = ',', required = true)]
        tabs: Vec<f64>,
        /// Index of the initially active tab
        #[arg(long, default_value_t = 0)]
        active: usize,
        /// Index of the clicked tab
        #[arg(long)]
        target: usize,
        /// Simulated frame rate
        #[arg(long, default_value_t = 60)]
        fps: u32,
        /// Panel extent in pixels
        #[arg(long, default_value_t = 100.0)]
        panel: f64,
    },
    /// Print the effective configuration
    Config {
        /// Print the built-in defaults instead
        #[arg(long)]
        default: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = match &cli.config {
        Some(path) => TabsConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => TabsConfig::default(),
    };

    match cli.command {
        Commands::Swipe {
            tabs,
            from,
            to,
            steps,
            active,
            panel,
        } => commands::swipe::run(config, &tabs, from, to, steps, active, panel),
        Commands::Click {
            tabs,
            active,
            target,
            fps,
            panel,
        } => commands::click::run(config, &tabs, active, target, fps, panel).await,
        Commands::Config { default } => commands::config::run(&config, default),
    }
}
