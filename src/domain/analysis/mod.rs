//! Analysis Module - The SAW ranking pipeline.
//!
//! Stateless functions that turn a decision problem into a ranking.
//!
//! # Components
//!
//! - `DecisionMatrixBuilder` - Projects alternatives x criteria into a `DecisionMatrix`
//! - `Normalizer` - Per-column Benefit/Cost normalization with a `DegeneratePolicy`
//! - `WeightedScorer` - Weighted row sums
//! - `Ranker` - Stable descending ordering into a `Ranking`
//! - `SawRanker` - Composes the four stages
//!
//! # Design Philosophy
//!
//! All functions are pure and stateless. Inputs are borrowed immutably and
//! results come back as new values, so concurrent calls sharing the same
//! criteria and alternatives need no locking.

mod decision_matrix;
mod normalizer;
mod pipeline;
mod ranker;
mod weighted_scorer;

pub use decision_matrix::{DecisionMatrix, DecisionMatrixBuilder};
pub use normalizer::{DegeneratePolicy, Normalizer};
pub use pipeline::{rank, SawAnalysis, SawRanker};
pub use ranker::{RankedAlternative, Ranker, Ranking};
pub use weighted_scorer::WeightedScorer;
