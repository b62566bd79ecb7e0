//! Normalizer - Polarity-aware rescaling of decision matrix columns.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::DecisionMatrix;
use crate::domain::decision::Criterion;
use crate::domain::foundation::{Polarity, RankingError};

/// What to do when a column's normalization would divide by zero.
///
/// A Benefit column is degenerate when its maximum is 0. A Cost cell is
/// degenerate when its own raw value is 0. Any cell whose quotient
/// overflows to infinity is degenerate as well.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DegeneratePolicy {
    /// Fail with `RankingError::DegenerateCriterion`.
    #[default]
    Reject,
    /// Treat the degenerate cell as 0.0.
    Zero,
}

/// SAW column normalization.
pub struct Normalizer;

impl Normalizer {
    /// Normalizes each column of `matrix` according to its criterion.
    ///
    /// # Algorithm
    /// - Benefit: `x / max(column)`
    /// - Cost: `min(column) / x`
    ///
    /// For non-negative inputs every result lies in [0, 1].
    ///
    /// # Errors
    ///
    /// - `DimensionMismatch` if `criteria.len()` differs from the column count
    /// - `DegenerateCriterion` for the first degenerate column under
    ///   [`DegeneratePolicy::Reject`]
    pub fn normalize(
        matrix: &DecisionMatrix,
        criteria: &[Criterion],
        policy: DegeneratePolicy,
    ) -> Result<DecisionMatrix, RankingError> {
        if criteria.len() != matrix.cols() {
            return Err(RankingError::dimension_mismatch(
                "criteria",
                matrix.cols(),
                criteria.len(),
            ));
        }

        let mut normalized = matrix.clone();

        for (j, criterion) in criteria.iter().enumerate() {
            let column = matrix.column(j).unwrap_or_default();
            let (min, max) = column_bounds(&column);
            let mut zeroed = 0usize;

            for (i, &x) in column.iter().enumerate() {
                let value = match criterion.polarity() {
                    Polarity::Benefit if max == 0.0 => None,
                    Polarity::Benefit => Some(x / max),
                    Polarity::Cost if x == 0.0 => None,
                    Polarity::Cost => Some(min / x),
                }
                .filter(|v| v.is_finite());

                let value = match (value, policy) {
                    (Some(v), _) => v,
                    (None, DegeneratePolicy::Zero) => {
                        zeroed += 1;
                        0.0
                    }
                    (None, DegeneratePolicy::Reject) => {
                        debug!(
                            criterion = criterion.name(),
                            polarity = %criterion.polarity(),
                            "Rejecting degenerate criterion"
                        );
                        return Err(RankingError::degenerate(
                            criterion.name(),
                            criterion.polarity(),
                        ));
                    }
                };
                normalized.set(i, j, value);
            }

            if zeroed > 0 {
                warn!(
                    criterion = criterion.name(),
                    polarity = %criterion.polarity(),
                    cells = zeroed,
                    "Degenerate criterion cells normalized to zero"
                );
            }
        }

        Ok(normalized)
    }
}

fn column_bounds(column: &[f64]) -> (f64, f64) {
    column
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), &v| {
            (min.min(v), max.max(v))
        })
}
