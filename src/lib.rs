// Core modules
pub mod app;
pub mod config;
pub mod domain;
pub mod engine;
pub mod export;
mod ui;

// Re-export commonly used types outside of crate
pub use app::App;
pub use config::ThresholdBand;
pub use domain::{Celsius, DailyRecord, Gdd};
pub use engine::{compute_all, compute_row};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Seed the table with the five-day sample dataset on startup
    #[arg(long, default_value_t = false)]
    pub sample: bool,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
