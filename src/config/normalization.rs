//! Normalization configuration

use serde::Deserialize;

use crate::domain::analysis::DegeneratePolicy;

/// Normalization settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NormalizationConfig {
    /// Handling of columns whose normalization would divide by zero
    #[serde(default)]
    pub degenerate_policy: DegeneratePolicy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalization_defaults_to_reject() {
        let config = NormalizationConfig::default();
        assert_eq!(config.degenerate_policy, DegeneratePolicy::Reject);
    }

    #[test]
    fn test_normalization_deserialization() {
        let config: NormalizationConfig =
            serde_json::from_str(r#"{"degenerate_policy": "zero"}"#).unwrap();
        assert_eq!(config.degenerate_policy, DegeneratePolicy::Zero);

        let empty: NormalizationConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.degenerate_policy, DegeneratePolicy::Reject);
    }
}
