//! Configuration module for the agroclime application.

mod persistence;
mod thresholds;

// Public
pub mod constants;

// Re-export commonly used items
pub use persistence::{PERSISTENCE, PrefsStore, ThresholdPrefs};
pub use thresholds::ThresholdBand;
