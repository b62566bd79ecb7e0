//! SAW Ranker - Decision support for choosing service providers
//!
//! This crate ranks candidate alternatives against weighted Benefit/Cost
//! criteria using the Simple Additive Weighting method.
//!
//! ```
//! use saw_ranker::domain::analysis::rank;
//! use saw_ranker::domain::decision::{Alternative, Criterion};
//!
//! let criteria = vec![
//!     Criterion::new("Harga", 0.6, "cost").unwrap(),
//!     Criterion::new("Rating", 0.4, "benefit").unwrap(),
//! ];
//! let alternatives = vec![
//!     Alternative::new("WO A").unwrap().with_value("Harga", 50.0).unwrap().with_value("Rating", 4.5).unwrap(),
//!     Alternative::new("WO B").unwrap().with_value("Harga", 35.0).unwrap().with_value("Rating", 4.0).unwrap(),
//! ];
//!
//! let ranking = rank(&criteria, &alternatives).unwrap();
//! assert_eq!(ranking.best().unwrap().name, "WO B");
//! ```

pub mod config;
pub mod domain;

pub use domain::analysis::{rank, Ranking, SawRanker};
pub use domain::decision::{Alternative, Criterion};
pub use domain::foundation::{Polarity, RankingError, ValidationError};
