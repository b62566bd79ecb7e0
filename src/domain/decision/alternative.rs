//! Alternative - A candidate being ranked, with its raw criterion values.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::domain::foundation::ValidationError;

/// A candidate service provider.
///
/// Values are keyed by trimmed criterion name. A value may be explicitly
/// unset (`None`), which is distinct from zero but contributes 0.0 to the
/// decision matrix just like a key that was never recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "AlternativeRecord")]
pub struct Alternative {
    name: String,
    criterion_values: HashMap<String, Option<f64>>,
    final_score: f64,
}

#[derive(Deserialize)]
struct AlternativeRecord {
    name: String,
    #[serde(default)]
    criterion_values: HashMap<String, Option<f64>>,
    #[serde(default)]
    final_score: f64,
}

impl TryFrom<AlternativeRecord> for Alternative {
    type Error = ValidationError;

    fn try_from(record: AlternativeRecord) -> Result<Self, Self::Error> {
        let mut alternative = Alternative::new(record.name)?;
        let mut seen = HashSet::new();
        for (criterion, value) in record.criterion_values {
            let key = criterion.trim().to_string();
            if !key.is_empty() && !seen.insert(key.clone()) {
                return Err(ValidationError::invalid_format(
                    "criterion_values",
                    format!("duplicate criterion '{}' after trimming", key),
                ));
            }
            alternative.set_value(key, value)?;
        }
        alternative.final_score = record.final_score;
        Ok(alternative)
    }
}

impl Alternative {
    /// Creates an alternative with no values and a final score of 0.0.
    pub fn new(name: impl AsRef<str>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: validate_name(name.as_ref())?,
            criterion_values: HashMap::new(),
            final_score: 0.0,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl AsRef<str>) -> Result<(), ValidationError> {
        self.name = validate_name(name.as_ref())?;
        Ok(())
    }

    /// Records (or explicitly unsets, with `None`) the value for a criterion.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the criterion name is empty after
    /// trimming or the value is not a finite number.
    pub fn set_value(
        &mut self,
        criterion: impl AsRef<str>,
        value: Option<f64>,
    ) -> Result<(), ValidationError> {
        let key = validate_criterion_key(criterion.as_ref())?;
        if let Some(v) = value {
            if !v.is_finite() {
                return Err(ValidationError::invalid_format(
                    "criterion_value",
                    format!("value for '{}' must be finite, got {}", key, v),
                ));
            }
        }
        self.criterion_values.insert(key, value);
        Ok(())
    }

    /// Builder-style variant of [`set_value`](Self::set_value) for a present value.
    pub fn with_value(mut self, criterion: impl AsRef<str>, value: f64) -> Result<Self, ValidationError> {
        self.set_value(criterion, Some(value))?;
        Ok(self)
    }

    /// Returns the value recorded for a criterion.
    ///
    /// Unknown criteria and explicitly unset values both yield `Ok(None)`.
    pub fn value(&self, criterion: impl AsRef<str>) -> Result<Option<f64>, ValidationError> {
        let key = validate_criterion_key(criterion.as_ref())?;
        Ok(self.criterion_values.get(&key).copied().flatten())
    }

    /// Returns true if a key was recorded for the criterion, even when unset.
    pub fn has_entry(&self, criterion: &str) -> bool {
        self.criterion_values.contains_key(criterion.trim())
    }

    /// Returns a snapshot of all recorded values.
    ///
    /// The map is an owned copy; mutating it does not affect the alternative.
    pub fn criterion_values(&self) -> HashMap<String, Option<f64>> {
        self.criterion_values.clone()
    }

    /// Value used in the decision matrix: missing or unset resolves to 0.0.
    pub(crate) fn matrix_value(&self, criterion: &str) -> f64 {
        self.criterion_values
            .get(criterion)
            .copied()
            .flatten()
            .unwrap_or(0.0)
    }

    pub fn final_score(&self) -> f64 {
        self.final_score
    }

    /// Stores a computed score. See `Ranking::write_scores`.
    pub fn set_final_score(&mut self, score: f64) {
        self.final_score = score;
    }
}

fn validate_name(name: &str) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field("alternative.name"));
    }
    Ok(trimmed.to_string())
}

fn validate_criterion_key(criterion: &str) -> Result<String, ValidationError> {
    let trimmed = criterion.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field("criterion.name"));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wedding_organizer() -> Alternative {
        Alternative::new("Elegant Wedding")
            .unwrap()
            .with_value("Harga Paket", 75_000_000.0)
            .unwrap()
            .with_value("Jumlah Vendor", 8.0)
            .unwrap()
    }

    #[test]
    fn new_alternative_starts_empty_with_zero_score() {
        let alt = Alternative::new("Happy Wedding").unwrap();
        assert_eq!(alt.name(), "Happy Wedding");
        assert!(alt.criterion_values().is_empty());
        assert_eq!(alt.final_score(), 0.0);
    }

    #[test]
    fn name_is_trimmed() {
        let alt = Alternative::new("  Test Name  ").unwrap();
        assert_eq!(alt.name(), "Test Name");
    }

    #[test]
    fn empty_name_is_rejected() {
        assert_eq!(
            Alternative::new("").unwrap_err(),
            ValidationError::empty_field("alternative.name")
        );
        assert!(Alternative::new(" \n ").is_err());

        let mut alt = wedding_organizer();
        assert!(alt.set_name("  ").is_err());
        assert_eq!(alt.name(), "Elegant Wedding");
    }

    #[test]
    fn set_and_get_value() {
        let alt = wedding_organizer();
        assert_eq!(alt.value("Jumlah Vendor").unwrap(), Some(8.0));
    }

    #[test]
    fn unknown_criterion_yields_none() {
        let alt = wedding_organizer();
        assert_eq!(alt.value("Rating").unwrap(), None);
        assert!(!alt.has_entry("Rating"));
    }

    #[test]
    fn explicit_unset_is_recorded_but_absent() {
        let mut alt = wedding_organizer();
        alt.set_value("Rating", None).unwrap();

        assert!(alt.has_entry("Rating"));
        assert_eq!(alt.value("Rating").unwrap(), None);
        assert_eq!(alt.criterion_values().get("Rating"), Some(&None));
    }

    #[test]
    fn criterion_key_is_trimmed_on_set_and_get() {
        let mut alt = Alternative::new("A").unwrap();
        alt.set_value("  Price ", Some(50_000.0)).unwrap();
        assert_eq!(alt.value("Price").unwrap(), Some(50_000.0));
        assert_eq!(alt.value(" Price  ").unwrap(), Some(50_000.0));
    }

    #[test]
    fn empty_criterion_key_is_rejected() {
        let mut alt = Alternative::new("A").unwrap();
        assert!(matches!(
            alt.set_value("", Some(1.0)),
            Err(ValidationError::EmptyField { .. })
        ));
        assert!(alt.set_value("   ", None).is_err());
        assert!(alt.value("").is_err());
    }

    #[test]
    fn non_finite_value_is_rejected() {
        let mut alt = Alternative::new("A").unwrap();
        assert!(alt.set_value("Price", Some(f64::NAN)).is_err());
        assert!(alt.set_value("Price", Some(f64::NEG_INFINITY)).is_err());
        assert!(!alt.has_entry("Price"));
    }

    #[test]
    fn updating_a_value_overwrites_it() {
        let mut alt = wedding_organizer();
        alt.set_value("Jumlah Vendor", Some(9.0)).unwrap();
        assert_eq!(alt.value("Jumlah Vendor").unwrap(), Some(9.0));
        assert_eq!(alt.criterion_values().len(), 2);
    }

    #[test]
    fn snapshot_mutation_does_not_leak_back() {
        let alt = wedding_organizer();
        let mut snapshot = alt.criterion_values();
        snapshot.insert("Jumlah Vendor".to_string(), Some(0.0));
        snapshot.insert("Injected".to_string(), Some(1.0));

        assert_eq!(alt.value("Jumlah Vendor").unwrap(), Some(8.0));
        assert!(!alt.has_entry("Injected"));
    }

    #[test]
    fn matrix_value_defaults_missing_and_unset_to_zero() {
        let mut alt = wedding_organizer();
        alt.set_value("Rating", None).unwrap();
        assert_eq!(alt.matrix_value("Rating"), 0.0);
        assert_eq!(alt.matrix_value("Jarak"), 0.0);
        assert_eq!(alt.matrix_value("Jumlah Vendor"), 8.0);
    }

    #[test]
    fn final_score_keeps_precision() {
        let mut alt = Alternative::new("A").unwrap();
        alt.set_final_score(0.123456789);
        assert!((alt.final_score() - 0.123456789).abs() < 1e-12);
    }

    #[test]
    fn deserialization_validates_keys() {
        let json = r#"{"name": " WO A ", "criterion_values": {" Harga ": 50000000.0, "Rating": null}}"#;
        let alt: Alternative = serde_json::from_str(json).unwrap();
        assert_eq!(alt.name(), "WO A");
        assert_eq!(alt.value("Harga").unwrap(), Some(50_000_000.0));
        assert!(alt.has_entry("Rating"));
        assert_eq!(alt.final_score(), 0.0);

        let bad = r#"{"name": "WO A", "criterion_values": {"  ": 1.0}}"#;
        assert!(serde_json::from_str::<Alternative>(bad).is_err());
    }

    #[test]
    fn deserialization_rejects_keys_that_collide_after_trimming() {
        let json = r#"{"name": "WO A", "criterion_values": {" Harga": 1.0, "Harga": 2.0}}"#;
        let err = serde_json::from_str::<Alternative>(json).unwrap_err();
        assert!(err.to_string().contains("duplicate criterion 'Harga'"));

        let record = AlternativeRecord {
            name: "WO A".to_string(),
            criterion_values: HashMap::from([
                ("Rating ".to_string(), Some(4.0)),
                ("Rating".to_string(), None),
            ]),
            final_score: 0.0,
        };
        assert!(matches!(
            Alternative::try_from(record),
            Err(ValidationError::InvalidFormat { ref field, .. }) if field == "criterion_values"
        ));
    }
}
