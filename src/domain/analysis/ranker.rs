//! Ranker - Stable descending ordering of scored alternatives.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::decision::Alternative;
use crate::domain::foundation::RankingError;

/// One alternative's place in a ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedAlternative {
    /// 1-based rank.
    pub position: usize,
    /// Index of the alternative in the slice that was ranked.
    pub index: usize,
    pub name: String,
    pub score: f64,
}

/// Result of a ranking run, best first.
///
/// Holds identities and scores only; the ranked alternatives themselves are
/// left untouched. Use [`Ranking::ordered`] to view them in rank order, or
/// [`Ranking::write_scores`] to store scores on them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ranking {
    entries: Vec<RankedAlternative>,
}

impl Ranking {
    pub fn entries(&self) -> &[RankedAlternative] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &RankedAlternative> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Top-ranked alternative. On a tie, the one that came first in the input.
    pub fn best(&self) -> Option<&RankedAlternative> {
        self.entries.first()
    }

    /// Score of the first entry with this name.
    pub fn score_of(&self, name: &str) -> Option<f64> {
        self.entries.iter().find(|e| e.name == name).map(|e| e.score)
    }

    /// Names in rank order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    /// Returns the ranked alternatives in rank order.
    ///
    /// `alternatives` must be the slice that was ranked; entries whose index
    /// falls outside it are skipped.
    pub fn ordered<'a>(&self, alternatives: &'a [Alternative]) -> Vec<&'a Alternative> {
        self.entries
            .iter()
            .filter_map(|e| alternatives.get(e.index))
            .collect()
    }

    /// Stores each computed score as the alternative's final score.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if `alternatives` is not the same length
    /// as the ranked slice.
    pub fn write_scores(&self, alternatives: &mut [Alternative]) -> Result<(), RankingError> {
        if alternatives.len() != self.entries.len() {
            return Err(RankingError::dimension_mismatch(
                "alternatives",
                self.entries.len(),
                alternatives.len(),
            ));
        }
        for entry in &self.entries {
            if let Some(alternative) = alternatives.get_mut(entry.index) {
                alternative.set_final_score(entry.score);
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Ranking {
    type Item = &'a RankedAlternative;
    type IntoIter = std::slice::Iter<'a, RankedAlternative>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Orders alternatives by score.
pub struct Ranker;

impl Ranker {
    /// Sorts by score descending.
    ///
    /// The sort is stable: alternatives with equal scores keep their
    /// relative input order.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if there is not exactly one score per
    /// alternative.
    pub fn rank(alternatives: &[Alternative], scores: &[f64]) -> Result<Ranking, RankingError> {
        if alternatives.len() != scores.len() {
            return Err(RankingError::dimension_mismatch(
                "scores",
                alternatives.len(),
                scores.len(),
            ));
        }

        let mut order: Vec<usize> = (0..alternatives.len()).collect();
        order.sort_by(|&a, &b| scores[b].partial_cmp(&scores[a]).unwrap_or(Ordering::Equal));

        let entries = order
            .into_iter()
            .enumerate()
            .map(|(rank, index)| RankedAlternative {
                position: rank + 1,
                index,
                name: alternatives[index].name().to_string(),
                score: scores[index],
            })
            .collect();

        Ok(Ranking { entries })
    }
}
