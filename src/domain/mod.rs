//! Domain layer containing the decision model and the ranking pipeline.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, enums, errors)
//! - `decision` - Caller-owned decision problem (criteria and alternatives)
//! - `analysis` - Pure SAW pipeline (matrix, normalization, scoring, ranking)

pub mod analysis;
pub mod decision;
pub mod foundation;
