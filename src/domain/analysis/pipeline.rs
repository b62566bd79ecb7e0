//! SAW pipeline - Matrix construction, normalization, scoring, ranking.

use serde::Serialize;
use tracing::{debug, trace};

use super::{
    DecisionMatrix, DecisionMatrixBuilder, DegeneratePolicy, Normalizer, Ranker, Ranking,
    WeightedScorer,
};
use crate::domain::decision::{Alternative, Criterion};
use crate::domain::foundation::RankingError;

/// Intermediate and final results of a single SAW run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SawAnalysis {
    /// Raw values, rows in alternative input order.
    pub decision_matrix: DecisionMatrix,
    /// Normalized values, same shape as `decision_matrix`.
    pub normalized_matrix: DecisionMatrix,
    pub ranking: Ranking,
}

/// Configured SAW ranking engine.
///
/// Stateless: every call rebuilds the matrix from its inputs, which are
/// only borrowed. Calling it twice with equal inputs yields equal results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SawRanker {
    degenerate_policy: DegeneratePolicy,
    trace_matrices: bool,
}

impl SawRanker {
    /// Creates a ranker that rejects degenerate criteria.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the degenerate-column policy.
    pub fn with_degenerate_policy(mut self, policy: DegeneratePolicy) -> Self {
        self.degenerate_policy = policy;
        self
    }

    /// Logs raw and normalized matrices at trace level.
    pub fn with_matrix_tracing(mut self, enabled: bool) -> Self {
        self.trace_matrices = enabled;
        self
    }

    pub fn degenerate_policy(&self) -> DegeneratePolicy {
        self.degenerate_policy
    }

    /// Ranks alternatives against criteria, best first.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if either sequence is empty
    /// - `DegenerateCriterion` if a column cannot be normalized and the
    ///   policy is [`DegeneratePolicy::Reject`]
    pub fn rank(
        &self,
        criteria: &[Criterion],
        alternatives: &[Alternative],
    ) -> Result<Ranking, RankingError> {
        self.analyze(criteria, alternatives).map(|analysis| analysis.ranking)
    }

    /// Runs the pipeline and keeps the intermediate matrices.
    pub fn analyze(
        &self,
        criteria: &[Criterion],
        alternatives: &[Alternative],
    ) -> Result<SawAnalysis, RankingError> {
        debug!(
            criteria = criteria.len(),
            alternatives = alternatives.len(),
            policy = ?self.degenerate_policy,
            "Running SAW ranking"
        );

        let decision_matrix = DecisionMatrixBuilder::build(criteria, alternatives)?;
        let normalized_matrix =
            Normalizer::normalize(&decision_matrix, criteria, self.degenerate_policy)?;

        if self.trace_matrices {
            trace!(matrix = ?decision_matrix, "Decision matrix");
            trace!(matrix = ?normalized_matrix, "Normalized matrix");
        }

        let scores = WeightedScorer::score(&normalized_matrix, criteria)?;
        let ranking = Ranker::rank(alternatives, &scores)?;

        if let Some(best) = ranking.best() {
            debug!(best = %best.name, score = best.score, "SAW ranking complete");
        }

        Ok(SawAnalysis {
            decision_matrix,
            normalized_matrix,
            ranking,
        })
    }
}

/// Ranks alternatives with the default engine (degenerate criteria rejected).
///
/// Inputs are never modified; see [`Ranking::write_scores`] to store the
/// scores on the alternatives.
pub fn rank(criteria: &[Criterion], alternatives: &[Alternative]) -> Result<Ranking, RankingError> {
    SawRanker::default().rank(criteria, alternatives)
}
