//! Decision module - The caller-defined decision problem.
//!
//! `Criterion` and `Alternative` are created and owned by the caller; the
//! ranking pipeline only ever borrows them.

mod alternative;
mod criterion;

pub use alternative::Alternative;
pub use criterion::{check_weight_sum, Criterion};
