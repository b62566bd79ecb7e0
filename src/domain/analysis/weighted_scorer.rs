//! Weighted Scorer - Weighted sum of normalized rows.

use super::DecisionMatrix;
use crate::domain::decision::Criterion;
use crate::domain::foundation::RankingError;

/// Computes SAW final scores.
pub struct WeightedScorer;

impl WeightedScorer {
    /// Computes one score per row: `score[i] = Σ_j normalized[i][j] * weight[j]`.
    ///
    /// Weights are not required to sum to 1. When they do and every
    /// normalized value lies in [0, 1], the scores lie in [0, 1] too.
    ///
    /// # Errors
    ///
    /// - `DimensionMismatch` if `criteria.len()` differs from the column count
    /// - `InvalidInput` if a weighted sum overflows to a non-finite score
    pub fn score(
        normalized: &DecisionMatrix,
        criteria: &[Criterion],
    ) -> Result<Vec<f64>, RankingError> {
        if criteria.len() != normalized.cols() {
            return Err(RankingError::dimension_mismatch(
                "criteria",
                normalized.cols(),
                criteria.len(),
            ));
        }

        let scores: Vec<f64> = normalized
            .iter_rows()
            .map(|row| {
                row.iter()
                    .zip(criteria)
                    .map(|(value, criterion)| value * criterion.weight())
                    .sum::<f64>()
            })
            .collect();

        if let Some(row) = scores.iter().position(|s| !s.is_finite()) {
            return Err(RankingError::invalid_input(format!(
                "score for alternative at row {} is not finite",
                row
            )));
        }

        Ok(scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_is_weighted_row_sum() {
        let normalized = DecisionMatrix::from_rows(vec![vec![0.7, 1.0, 1.0], vec![1.0, 0.5, 0.0]]).unwrap();
        let criteria = vec![
            Criterion::cost("Harga", 0.35).unwrap(),
            Criterion::benefit("Vendor", 0.25).unwrap(),
            Criterion::benefit("Rating", 0.40).unwrap(),
        ];

        let scores = WeightedScorer::score(&normalized, &criteria).unwrap();

        assert!((scores[0] - 0.895).abs() < 1e-9);
        assert!((scores[1] - 0.475).abs() < 1e-9);
    }

    #[test]
    fn zero_weight_criterion_contributes_nothing() {
        let normalized = DecisionMatrix::from_rows(vec![vec![1.0, 1.0]]).unwrap();
        let criteria = vec![
            Criterion::benefit("Vendor", 0.0).unwrap(),
            Criterion::benefit("Rating", 0.5).unwrap(),
        ];

        let scores = WeightedScorer::score(&normalized, &criteria).unwrap();

        assert_eq!(scores, vec![0.5]);
    }

    #[test]
    fn weights_are_not_required_to_sum_to_one() {
        let normalized = DecisionMatrix::from_rows(vec![vec![1.0, 1.0]]).unwrap();
        let criteria = vec![
            Criterion::benefit("Vendor", 1.0).unwrap(),
            Criterion::benefit("Rating", 1.0).unwrap(),
        ];

        let scores = WeightedScorer::score(&normalized, &criteria).unwrap();

        assert_eq!(scores, vec![2.0]);
    }

    #[test]
    fn overflowing_sum_is_rejected() {
        let normalized = DecisionMatrix::from_rows(vec![vec![1.0, 1.0], vec![f64::MAX, f64::MAX]]).unwrap();
        let criteria = vec![
            Criterion::benefit("Vendor", 1.0).unwrap(),
            Criterion::benefit("Rating", 1.0).unwrap(),
        ];

        let err = WeightedScorer::score(&normalized, &criteria).unwrap_err();

        assert!(matches!(err, RankingError::InvalidInput { ref reason } if reason.contains("row 1")));
    }

    #[test]
    fn mismatched_criteria_count_is_rejected() {
        let normalized = DecisionMatrix::from_rows(vec![vec![1.0]]).unwrap();
        let criteria = vec![
            Criterion::benefit("Vendor", 0.5).unwrap(),
            Criterion::benefit("Rating", 0.5).unwrap(),
        ];

        assert_eq!(
            WeightedScorer::score(&normalized, &criteria).unwrap_err(),
            RankingError::dimension_mismatch("criteria", 1, 2)
        );
    }
}
