mod core;

pub use core::{RowResult, Summary, compute_all, compute_row};
