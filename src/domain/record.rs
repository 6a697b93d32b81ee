//! Daily temperature observations as the user enters them.

use serde::{Deserialize, Serialize};

use crate::domain::Celsius;

/// One table row: raw field text exactly as typed.
///
/// Fields stay as strings so that partially-typed values survive the
/// per-frame recompute; parsing happens at read time and a cell that
/// fails to parse simply contributes nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DailyRecord {
    /// Opaque label, never used in computation. Carried through to export.
    pub date: String,
    pub tmin: String,
    pub tmax: String,
}

impl DailyRecord {
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            tmin: String::new(),
            tmax: String::new(),
        }
    }

    pub fn with_temps(date: impl Into<String>, tmin: f64, tmax: f64) -> Self {
        Self {
            date: date.into(),
            tmin: format!("{tmin}"),
            tmax: format!("{tmax}"),
        }
    }

    pub fn tmin(&self) -> Option<Celsius> {
        Celsius::parse(&self.tmin)
    }

    pub fn tmax(&self) -> Option<Celsius> {
        Celsius::parse(&self.tmax)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_rows_parse_independently() {
        let mut rec = DailyRecord::new("2026-08-27");
        assert_eq!(rec.tmin(), None);
        assert_eq!(rec.tmax(), None);

        rec.tmin = "8.2".to_string();
        assert_eq!(rec.tmin(), Some(Celsius::new(8.2)));
        assert_eq!(rec.tmax(), None);
    }
}
