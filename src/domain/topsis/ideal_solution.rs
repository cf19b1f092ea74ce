//! Ideal solution resolution - Best and worst reference vectors.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::foundation::CriterionType;

use super::{Criterion, WeightedMatrix};

/// Positive-ideal and negative-ideal reference values per criterion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdealSolution {
    pub positive: HashMap<String, f64>,
    pub negative: HashMap<String, f64>,
}

/// Derives the ideal reference vectors from the weighted matrix.
pub struct IdealSolutionResolver;

impl IdealSolutionResolver {
    /// Resolves one (positive, negative) pair per criterion.
    ///
    /// Each criterion folds independently over all alternatives' weighted
    /// values with min/max accumulators seeded at +/- infinity, so the
    /// outcome never depends on which alternative is visited first.
    /// Benefit criteria take max as positive and min as negative; cost
    /// criteria invert that.
    ///
    /// # Edge Cases
    /// - Empty alternatives: unreachable, the validator rejects the
    ///   request upstream.
    pub fn resolve(weighted: &WeightedMatrix, criteria: &[Criterion]) -> IdealSolution {
        let mut ideal = IdealSolution::default();

        for criterion in criteria {
            let mut min = f64::INFINITY;
            let mut max = f64::NEG_INFINITY;

            for row in weighted.values() {
                let value = row.get(&criterion.name).copied().unwrap_or(0.0);
                min = min.min(value);
                max = max.max(value);
            }

            let (positive, negative) = match criterion.criterion_type {
                CriterionType::Benefit => (max, min),
                CriterionType::Cost => (min, max),
            };
            ideal.positive.insert(criterion.name.clone(), positive);
            ideal.negative.insert(criterion.name.clone(), negative);
        }

        ideal
    }
}
