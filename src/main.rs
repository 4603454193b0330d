//! gridshift - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// gridshift - drag-to-reorder grid demo
#[derive(Parser, Debug)]
#[command(name = "gridshift")]
#[command(version)]
#[command(about = "Terminal demo of drag-to-reorder with empty-slot drop targets")]
pub struct Args {
    /// Grid rows (must be positive)
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..))]
    pub rows: Option<u16>,

    /// Grid columns (must be positive)
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..))]
    pub cols: Option<u16>,

    /// Number of empty slots seeded into the grid
    #[arg(short, long)]
    pub empty_slots: Option<u16>,

    /// Maximum autoscroll speed in cells per second
    #[arg(long)]
    pub scroll_speed: Option<f64>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), gridshift::model::AppError> {
    let args = Args::parse();

    // Set NO_COLOR env var if --no-color flag is passed
    // This ensures consistent color handling throughout the application
    if args.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Load configuration with full precedence chain:
    // Defaults → Config File → CLI Args
    let config = {
        let config_file = gridshift::config::load_config(args.config.clone())?;
        let merged = gridshift::config::merge_config(config_file);
        gridshift::config::apply_cli_overrides(
            merged,
            args.rows,
            args.cols,
            args.empty_slots,
            args.scroll_speed,
        )
    };

    gridshift::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    gridshift::view::run(&config)?;

    Ok(())
}
