//! Closeness scoring and ranking - Final TOPSIS results.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

use super::{Alternative, NormalizedMatrix, SeparationMeasures, WeightedMatrix};

/// Scored and ranked outcome for a single alternative.
///
/// Carries the normalized and weighted value rows so callers can audit how
/// the score came about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopsisResult {
    pub name: String,
    /// Closeness coefficient in [0, 1]; higher is better.
    pub closeness: f64,
    /// 1-based position after sorting by closeness descending.
    pub rank: usize,
    pub positive_distance: f64,
    pub negative_distance: f64,
    pub normalized_values: HashMap<String, f64>,
    pub weighted_values: HashMap<String, f64>,
}

/// Computes closeness coefficients and assigns ranks.
pub struct ClosenessRanker;

impl ClosenessRanker {
    /// Scores every alternative and returns results ordered by rank.
    ///
    /// `closeness = d_negative / (d_positive + d_negative)` when the
    /// denominator is strictly positive, else 0.0 (the alternative
    /// coincides with both ideal points).
    ///
    /// Ranking sorts by closeness descending with a stable sort: equal
    /// closeness keeps the input alternative order. That tie-break is part
    /// of the contract, not an accident of the sort used. Ranks are
    /// 1-based consecutive positions; ties still get distinct ranks.
    pub fn rank(
        alternatives: &[Alternative],
        measures: &SeparationMeasures,
        normalized: &NormalizedMatrix,
        weighted: &WeightedMatrix,
    ) -> Vec<TopsisResult> {
        let mut results: Vec<TopsisResult> = alternatives
            .iter()
            .map(|alternative| {
                let positive_distance = measures
                    .to_positive
                    .get(&alternative.name)
                    .copied()
                    .unwrap_or(0.0);
                let negative_distance = measures
                    .to_negative
                    .get(&alternative.name)
                    .copied()
                    .unwrap_or(0.0);

                let denominator = positive_distance + negative_distance;
                let closeness = if denominator > 0.0 {
                    negative_distance / denominator
                } else {
                    0.0
                };

                TopsisResult {
                    name: alternative.name.clone(),
                    closeness,
                    rank: 0,
                    positive_distance,
                    negative_distance,
                    normalized_values: normalized
                        .get(&alternative.name)
                        .cloned()
                        .unwrap_or_default(),
                    weighted_values: weighted
                        .get(&alternative.name)
                        .cloned()
                        .unwrap_or_default(),
                }
            })
            .collect();

        // slice::sort_by is stable: equal closeness preserves input order.
        results.sort_by(|a, b| {
            b.closeness
                .partial_cmp(&a.closeness)
                .unwrap_or(Ordering::Equal)
        });

        for (position, result) in results.iter_mut().enumerate() {
            result.rank = position + 1;
        }

        results
    }
}
