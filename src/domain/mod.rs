// Domain types and value objects
mod record;
mod temperature;

// Re-export commonly used types
pub use record::DailyRecord;
pub use temperature::{Celsius, Gdd};
