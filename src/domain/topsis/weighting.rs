//! Weighted matrix construction - Applies criterion weights to the
//! normalized decision matrix.

use std::collections::HashMap;

use super::{Criterion, NormalizedMatrix};

/// Weighted normalized values per alternative name, keyed by criterion name.
pub type WeightedMatrix = HashMap<String, HashMap<String, f64>>;

/// Multiplies normalized values by criterion weights.
pub struct WeightedMatrixBuilder;

impl WeightedMatrixBuilder {
    /// Builds `weighted[alt][crit] = normalized[alt][crit] * weight[crit]`.
    ///
    /// Weight lookup always succeeds: the criteria and the normalized
    /// matrix columns are drawn from the same validated criterion set.
    pub fn build(normalized: &NormalizedMatrix, criteria: &[Criterion]) -> WeightedMatrix {
        let weights: HashMap<&str, f64> = criteria
            .iter()
            .map(|c| (c.name.as_str(), c.weight))
            .collect();

        let mut weighted = HashMap::new();
        for (alt_name, row) in normalized {
            let mut weighted_row = HashMap::new();
            for (criterion_name, value) in row {
                let weight = weights.get(criterion_name.as_str()).copied().unwrap_or(0.0);
                weighted_row.insert(criterion_name.clone(), value * weight);
            }
            weighted.insert(alt_name.clone(), weighted_row);
        }

        weighted
    }
}
