//! Separation measures - Euclidean distances to the ideal solutions.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{Criterion, IdealSolution, WeightedMatrix};

/// Distances from each alternative to the two ideal reference vectors,
/// keyed by alternative name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeparationMeasures {
    pub to_positive: HashMap<String, f64>,
    pub to_negative: HashMap<String, f64>,
}

/// Computes Euclidean distances in criterion-weighted space.
pub struct SeparationCalculator;

impl SeparationCalculator {
    /// Computes `sqrt(sum of (weighted - ideal)^2 over criteria)` for each
    /// alternative, against both reference vectors.
    ///
    /// Sums accumulate in criterion declaration order so repeated runs over
    /// the same request reproduce identical floating-point results.
    pub fn compute(
        weighted: &WeightedMatrix,
        ideal: &IdealSolution,
        criteria: &[Criterion],
    ) -> SeparationMeasures {
        let mut measures = SeparationMeasures::default();

        for (alt_name, row) in weighted {
            let mut positive_sum = 0.0;
            let mut negative_sum = 0.0;

            for criterion in criteria {
                let value = row.get(&criterion.name).copied().unwrap_or(0.0);
                let positive_ref = ideal.positive.get(&criterion.name).copied().unwrap_or(0.0);
                let negative_ref = ideal.negative.get(&criterion.name).copied().unwrap_or(0.0);
                positive_sum += (value - positive_ref).powi(2);
                negative_sum += (value - negative_ref).powi(2);
            }

            measures
                .to_positive
                .insert(alt_name.clone(), positive_sum.sqrt());
            measures
                .to_negative
                .insert(alt_name.clone(), negative_sum.sqrt());
        }

        measures
    }
}
