//! Temperature and heat-unit value types.

use serde::{Deserialize, Serialize};

/// A temperature in degrees Celsius.
///
/// Only finite values are representable through [`Celsius::parse`]; the
/// raw constructor is reserved for values already known to be finite
/// (clipping arithmetic on two finite inputs stays finite).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Celsius(f64);

impl Celsius {
    pub const fn new(val: f64) -> Self {
        Self(val)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Parses user-entered field text. Empty, unparseable or non-finite
    /// input yields `None` — a half-typed cell is a normal state here,
    /// not an error.
    pub fn parse(text: &str) -> Option<Self> {
        let v: f64 = text.trim().parse().ok()?;
        v.is_finite().then_some(Self(v))
    }

    #[inline]
    pub fn max(self, other: Self) -> Self {
        if self.0 >= other.0 { self } else { other }
    }

    #[inline]
    pub fn min(self, other: Self) -> Self {
        if self.0 <= other.0 { self } else { other }
    }
}

impl std::fmt::Display for Celsius {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Growing degree days accumulated over one day.
///
/// The constructor floors at zero: a day whose clipped average sits at or
/// below base contributes no heat units.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Gdd(f64);

impl Gdd {
    pub const ZERO: Self = Self(0.0);

    pub const fn new(val: f64) -> Self {
        let v = if val < 0.0 { 0.0 } else { val };
        Self(v)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl std::ops::AddAssign for Gdd {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl std::fmt::Display for Gdd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
