//! Ranking engine configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `SAW_RANKER` prefix and nested values use double underscores as separators.
//!
//! Every setting has a default, so loading never requires any variable to be set.
//!
//! # Example
//!
//! ```no_run
//! use saw_ranker::config::RankerConfig;
//!
//! let config = RankerConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! let ranker = config.ranker();
//! ```

mod error;
mod normalization;
mod scoring;

pub use error::{ConfigError, ValidationError};
pub use normalization::NormalizationConfig;
pub use scoring::ScoringConfig;

use serde::Deserialize;

use crate::domain::analysis::SawRanker;
use crate::domain::decision::{check_weight_sum, Criterion};
use crate::domain::foundation::ValidationError as DomainValidationError;

/// Root ranking engine configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RankerConfig {
    /// Normalization configuration (degenerate column policy)
    #[serde(default)]
    pub normalization: NormalizationConfig,

    /// Scoring configuration (weight-sum tolerance, matrix tracing)
    #[serde(default)]
    pub scoring: ScoringConfig,
}

impl RankerConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `SAW_RANKER` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `SAW_RANKER__NORMALIZATION__DEGENERATE_POLICY=zero`
    /// - `SAW_RANKER__SCORING__WEIGHT_SUM_TOLERANCE=0.01`
    /// - `SAW_RANKER__SCORING__TRACE_MATRICES=true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SAW_RANKER")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.scoring.validate()?;
        Ok(())
    }

    /// Build a ranking engine from this configuration
    pub fn ranker(&self) -> SawRanker {
        SawRanker::new()
            .with_degenerate_policy(self.normalization.degenerate_policy)
            .with_matrix_tracing(self.scoring.trace_matrices)
    }

    /// Check criterion weights against the configured tolerance
    pub fn check_weights(
        &self,
        criteria: &[Criterion],
    ) -> Result<f64, DomainValidationError> {
        check_weight_sum(criteria, self.scoring.weight_sum_tolerance)
    }
}
