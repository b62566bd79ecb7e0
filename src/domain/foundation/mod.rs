//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, enums, and error types that form the vocabulary
//! of the ranking domain.

mod errors;
mod polarity;
mod weight;

pub use errors::{ErrorCode, RankingError, ValidationError};
pub use polarity::Polarity;
pub use weight::Weight;
