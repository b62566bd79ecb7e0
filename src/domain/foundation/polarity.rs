//! Criterion polarity: whether higher raw values are better or worse.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Direction of preference for a criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Polarity {
    /// Higher values are better.
    Benefit,
    /// Lower values are better.
    Cost,
}

impl Polarity {
    /// Parses a polarity, ignoring case and surrounding whitespace.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let normalized = value.trim();
        if normalized.is_empty() {
            return Err(ValidationError::empty_field("polarity"));
        }
        if normalized.eq_ignore_ascii_case("benefit") {
            Ok(Polarity::Benefit)
        } else if normalized.eq_ignore_ascii_case("cost") {
            Ok(Polarity::Cost)
        } else {
            Err(ValidationError::invalid_format(
                "polarity",
                format!("expected 'Benefit' or 'Cost', got '{}'", normalized),
            ))
        }
    }

    /// Returns the canonical label.
    pub fn label(&self) -> &'static str {
        match self {
            Polarity::Benefit => "Benefit",
            Polarity::Cost => "Cost",
        }
    }

    /// Returns true for Benefit.
    pub fn is_benefit(&self) -> bool {
        matches!(self, Polarity::Benefit)
    }

    /// Returns true for Cost.
    pub fn is_cost(&self) -> bool {
        matches!(self, Polarity::Cost)
    }
}

impl FromStr for Polarity {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Polarity {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
