//! Scoring configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Scoring settings
#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    /// Allowed deviation from 1.0 when callers check weight sums
    #[serde(default = "default_weight_sum_tolerance")]
    pub weight_sum_tolerance: f64,

    /// Log raw and normalized matrices at trace level
    #[serde(default)]
    pub trace_matrices: bool,
}

impl ScoringConfig {
    /// Validate scoring configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let tolerance = self.weight_sum_tolerance;
        if !(tolerance > 0.0 && tolerance < 1.0) {
            return Err(ValidationError::InvalidWeightSumTolerance(tolerance));
        }
        Ok(())
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weight_sum_tolerance: default_weight_sum_tolerance(),
            trace_matrices: false,
        }
    }
}

fn default_weight_sum_tolerance() -> f64 {
    0.001
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoring_defaults() {
        let config = ScoringConfig::default();
        assert!((config.weight_sum_tolerance - 0.001).abs() < f64::EPSILON);
        assert!(!config.trace_matrices);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_scoring_rejects_bad_tolerance() {
        for tolerance in [0.0, -0.1, 1.0, f64::NAN] {
            let config = ScoringConfig {
                weight_sum_tolerance: tolerance,
                trace_matrices: false,
            };
            assert!(config.validate().is_err(), "tolerance {} should fail", tolerance);
        }
    }

    #[test]
    fn test_scoring_deserialization_fills_defaults() {
        let config: ScoringConfig = serde_json::from_str(r#"{"trace_matrices": true}"#).unwrap();
        assert!(config.trace_matrices);
        assert!((config.weight_sum_tolerance - 0.001).abs() < f64::EPSILON);
    }
}
