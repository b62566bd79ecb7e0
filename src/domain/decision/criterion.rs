//! Criterion - A weighted, polarized dimension alternatives are judged on.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Polarity, ValidationError, Weight};

/// A decision criterion.
///
/// The name is the join key against [`Alternative`](super::Alternative)
/// values. It is trimmed and case-sensitive; uniqueness across a criteria
/// list is up to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CriterionRecord")]
pub struct Criterion {
    name: String,
    weight: Weight,
    polarity: Polarity,
}

/// Unvalidated wire shape, accepting polarity in any casing.
#[derive(Deserialize)]
struct CriterionRecord {
    name: String,
    weight: f64,
    polarity: String,
}

impl TryFrom<CriterionRecord> for Criterion {
    type Error = ValidationError;

    fn try_from(record: CriterionRecord) -> Result<Self, Self::Error> {
        Criterion::new(record.name, record.weight, &record.polarity)
    }
}

impl Criterion {
    /// Creates a criterion from a polarity string ("benefit"/"cost", any casing).
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the name is empty after trimming, the
    /// weight is outside [0, 1], or the polarity is not recognized.
    pub fn new(
        name: impl AsRef<str>,
        weight: f64,
        polarity: &str,
    ) -> Result<Self, ValidationError> {
        let name = validate_name(name.as_ref())?;
        let weight = Weight::try_new(weight)?;
        let polarity = Polarity::parse(polarity)?;
        Ok(Self {
            name,
            weight,
            polarity,
        })
    }

    /// Creates a criterion with an already typed polarity.
    pub fn with_polarity(
        name: impl AsRef<str>,
        weight: f64,
        polarity: Polarity,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name: validate_name(name.as_ref())?,
            weight: Weight::try_new(weight)?,
            polarity,
        })
    }

    /// Creates a Benefit criterion.
    pub fn benefit(name: impl AsRef<str>, weight: f64) -> Result<Self, ValidationError> {
        Self::with_polarity(name, weight, Polarity::Benefit)
    }

    /// Creates a Cost criterion.
    pub fn cost(name: impl AsRef<str>, weight: f64) -> Result<Self, ValidationError> {
        Self::with_polarity(name, weight, Polarity::Cost)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weight(&self) -> f64 {
        self.weight.value()
    }

    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Renames the criterion. The name is trimmed.
    pub fn set_name(&mut self, name: impl AsRef<str>) -> Result<(), ValidationError> {
        self.name = validate_name(name.as_ref())?;
        Ok(())
    }

    /// Changes the weight, e.g. for sensitivity analysis.
    pub fn set_weight(&mut self, weight: f64) -> Result<(), ValidationError> {
        self.weight = Weight::try_new(weight)?;
        Ok(())
    }

    pub fn set_polarity(&mut self, polarity: Polarity) {
        self.polarity = polarity;
    }

    /// Changes the polarity from its string form.
    pub fn set_polarity_str(&mut self, polarity: &str) -> Result<(), ValidationError> {
        self.polarity = Polarity::parse(polarity)?;
        Ok(())
    }
}

fn validate_name(name: &str) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field("criterion.name"));
    }
    Ok(trimmed.to_string())
}

/// Checks that criterion weights sum to 1.0 within `tolerance`.
///
/// The ranking pipeline never calls this; it is offered to callers that
/// want to validate a criteria set before ranking. Returns the sum.
pub fn check_weight_sum(criteria: &[Criterion], tolerance: f64) -> Result<f64, ValidationError> {
    let sum: f64 = criteria.iter().map(Criterion::weight).sum();
    if (sum - 1.0).abs() > tolerance {
        return Err(ValidationError::out_of_range(
            "weight_sum",
            1.0 - tolerance,
            1.0 + tolerance,
            sum,
        ));
    }
    Ok(sum)
}
