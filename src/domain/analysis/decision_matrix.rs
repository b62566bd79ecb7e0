//! Decision Matrix - Dense alternatives x criteria table of raw values.

use serde::Serialize;

use crate::domain::decision::{Alternative, Criterion};
use crate::domain::foundation::RankingError;

/// A dense row-major matrix; row `i` is an alternative, column `j` a criterion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionMatrix {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl DecisionMatrix {
    /// Creates a matrix from explicit rows.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if there are no rows or the rows have no columns
    /// - `InvalidInput` if any value is NaN or infinite
    /// - `DimensionMismatch` if the rows are ragged
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, RankingError> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        if rows.is_empty() || cols == 0 {
            return Err(RankingError::invalid_input("decision matrix is empty"));
        }

        let row_count = rows.len();
        let mut values = Vec::with_capacity(row_count * cols);
        for row in rows {
            if row.len() != cols {
                return Err(RankingError::dimension_mismatch("matrix row", cols, row.len()));
            }
            if row.iter().any(|v| !v.is_finite()) {
                return Err(RankingError::invalid_input(
                    "decision matrix contains a non-finite value",
                ));
            }
            values.extend(row);
        }

        Ok(Self {
            rows: row_count,
            cols,
            values,
        })
    }

    /// Number of rows (alternatives).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (criteria).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Gets a cell, or None when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.values[row * self.cols + col])
    }

    /// Returns one row as a slice.
    pub fn row(&self, row: usize) -> Option<&[f64]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(&self.values[start..start + self.cols])
    }

    /// Returns one column as an owned vector.
    pub fn column(&self, col: usize) -> Option<Vec<f64>> {
        if col >= self.cols {
            return None;
        }
        Some(
            self.values
                .iter()
                .skip(col)
                .step_by(self.cols)
                .copied()
                .collect(),
        )
    }

    /// Iterates over rows in order.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> {
        self.values.chunks(self.cols)
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: f64) {
        self.values[row * self.cols + col] = value;
    }
}

/// Projects alternatives against criteria into a [`DecisionMatrix`].
pub struct DecisionMatrixBuilder;

impl DecisionMatrixBuilder {
    /// Builds the raw decision matrix.
    ///
    /// Row order mirrors `alternatives`, column order mirrors `criteria`.
    /// A value that is unset or was never recorded becomes 0.0.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if either sequence is empty.
    pub fn build(
        criteria: &[Criterion],
        alternatives: &[Alternative],
    ) -> Result<DecisionMatrix, RankingError> {
        if criteria.is_empty() {
            return Err(RankingError::invalid_input("criteria list is empty"));
        }
        if alternatives.is_empty() {
            return Err(RankingError::invalid_input("alternatives list is empty"));
        }

        let values = alternatives
            .iter()
            .flat_map(|alt| criteria.iter().map(move |c| alt.matrix_value(c.name())))
            .collect();

        Ok(DecisionMatrix {
            rows: alternatives.len(),
            cols: criteria.len(),
            values,
        })
    }
}
