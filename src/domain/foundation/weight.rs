//! Weight value object (0.0-1.0 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A criterion weight between 0.0 and 1.0 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Weight(f64);

impl Weight {
    /// Zero weight (criterion ignored).
    pub const ZERO: Self = Self(0.0);

    /// Full weight.
    pub const ONE: Self = Self(1.0);

    /// Creates a Weight, returning error if out of range or not finite.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::invalid_format(
                "weight",
                format!("expected a finite number, got {}", value),
            ));
        }
        if !(0.0..=1.0).contains(&value) {
            return Err(ValidationError::out_of_range("weight", 0.0, 1.0, value));
        }
        Ok(Self(value))
    }

    /// Returns the value as f64.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self::ZERO
    }
}

impl TryFrom<f64> for Weight {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Weight> for f64 {
    fn from(weight: Weight) -> Self {
        weight.0
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
