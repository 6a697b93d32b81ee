//! CSV export of the observation table.

mod csv;
mod sink;

pub use csv::{build_csv, export_filename};
pub use sink::deliver_csv;
