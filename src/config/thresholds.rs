//! The effective temperature band.

use crate::domain::Celsius;

/// Base/upper thresholds as parsed from the live input fields.
///
/// Either bound may be absent while the user is typing; an absent or
/// inverted band never errors, it just yields zero degree-days downstream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdBand {
    pub base: Option<Celsius>,
    pub upper: Option<Celsius>,
}

impl ThresholdBand {
    pub fn new(base: f64, upper: f64) -> Self {
        Self {
            base: base.is_finite().then(|| Celsius::new(base)),
            upper: upper.is_finite().then(|| Celsius::new(upper)),
        }
    }

    pub fn from_inputs(base: &str, upper: &str) -> Self {
        Self {
            base: Celsius::parse(base),
            upper: Celsius::parse(upper),
        }
    }

    /// The validated `(base, upper)` pair. `None` unless both bounds are
    /// finite and `upper > base`.
    pub fn bounds(&self) -> Option<(Celsius, Celsius)> {
        match (self.base, self.upper) {
            (Some(base), Some(upper)) if upper > base => Some((base, upper)),
            _ => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.bounds().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_band_is_invalid() {
        assert!(ThresholdBand::new(10.0, 30.0).is_valid());
        assert!(!ThresholdBand::new(30.0, 10.0).is_valid());
        assert!(!ThresholdBand::new(10.0, 10.0).is_valid());
        assert!(!ThresholdBand::from_inputs("", "30").is_valid());
        assert!(!ThresholdBand::from_inputs("10", "oops").is_valid());
    }
}
