//! Vector normalization - Column norms and the normalized decision matrix.

use std::collections::HashMap;

use super::TopsisRequest;

/// Euclidean column norm per criterion name.
pub type NormalizationFactors = HashMap<String, f64>;

/// Normalized values per alternative name, keyed by criterion name.
pub type NormalizedMatrix = HashMap<String, HashMap<String, f64>>;

/// Computes per-criterion Euclidean vector norms.
pub struct NormalizationFactorCalculator;

impl NormalizationFactorCalculator {
    /// Computes `sqrt(sum of value^2 over alternatives)` for each criterion.
    ///
    /// Pure function of validated input; there is no error path. A factor
    /// of exactly zero is a legitimate outcome (every alternative has value
    /// 0 for that criterion) and is preserved, not treated as an error.
    pub fn compute(request: &TopsisRequest) -> NormalizationFactors {
        let mut factors = HashMap::new();

        for criterion in &request.criteria {
            let sum_of_squares: f64 = request
                .alternatives
                .iter()
                .map(|alt| {
                    let value = alt.value(&criterion.name).unwrap_or(0.0);
                    value * value
                })
                .sum();
            factors.insert(criterion.name.clone(), sum_of_squares.sqrt());
        }

        factors
    }
}

/// Divides each alternative's values by the per-criterion norm.
pub struct MatrixNormalizer;

impl MatrixNormalizer {
    /// Normalizes the decision matrix: `value / factor` when `factor > 0`.
    ///
    /// # Edge Cases
    /// - Zero factor: the whole column normalizes to 0.0. An all-zero
    ///   column carries no information to distinguish alternatives, and
    ///   dividing by it would be undefined.
    pub fn normalize(
        request: &TopsisRequest,
        factors: &NormalizationFactors,
    ) -> NormalizedMatrix {
        let mut normalized = HashMap::new();

        for alternative in &request.alternatives {
            let mut row = HashMap::new();
            for criterion in &request.criteria {
                let value = alternative.value(&criterion.name).unwrap_or(0.0);
                let factor = factors.get(&criterion.name).copied().unwrap_or(0.0);
                let entry = if factor > 0.0 { value / factor } else { 0.0 };
                row.insert(criterion.name.clone(), entry);
            }
            normalized.insert(alternative.name.clone(), row);
        }

        normalized
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::CriterionType;

    fn two_by_two_request() -> TopsisRequest {
        TopsisRequest::builder()
            .criterion("C1", 0.5, CriterionType::Benefit)
            .criterion("C2", 0.5, CriterionType::Cost)
            .alternative("A1", vec![("C1", 1.0), ("C2", 2.0)])
            .alternative("A2", vec![("C1", 3.0), ("C2", 4.0)])
            .build()
    }

    // Normalization factor tests

    #[test]
    fn factors_are_euclidean_column_norms() {
        let factors = NormalizationFactorCalculator::compute(&two_by_two_request());

        // C1: sqrt(1 + 9) = sqrt(10), C2: sqrt(4 + 16) = sqrt(20)
        assert!((factors["C1"] - 10.0_f64.sqrt()).abs() < 1e-12);
        assert!((factors["C2"] - 20.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn factors_match_worked_example() {
        let request = TopsisRequest::builder()
            .criterion("GPA", 0.5, CriterionType::Benefit)
            .criterion("Skill", 0.5, CriterionType::Benefit)
            .alternative("A", vec![("GPA", 3.5), ("Skill", 80.0)])
            .alternative("B", vec![("GPA", 3.2), ("Skill", 90.0)])
            .alternative("C", vec![("GPA", 3.8), ("Skill", 85.0)])
            .build();

        let factors = NormalizationFactorCalculator::compute(&request);

        // sqrt(3.5^2 + 3.2^2 + 3.8^2) = sqrt(36.93) and sqrt(21725)
        assert!((factors["GPA"] - 6.0770).abs() < 1e-4);
        assert!((factors["Skill"] - 147.3941).abs() < 1e-4);
    }

    #[test]
    fn all_zero_column_yields_zero_factor() {
        let request = TopsisRequest::builder()
            .criterion("C1", 1.0, CriterionType::Benefit)
            .alternative("A1", vec![("C1", 0.0)])
            .alternative("A2", vec![("C1", 0.0)])
            .build();

        let factors = NormalizationFactorCalculator::compute(&request);
        assert_eq!(factors["C1"], 0.0);
    }

    // Matrix normalization tests

    #[test]
    fn normalizes_values_by_column_norm() {
        let request = two_by_two_request();
        let factors = NormalizationFactorCalculator::compute(&request);
        let normalized = MatrixNormalizer::normalize(&request, &factors);

        assert!((normalized["A1"]["C1"] - 1.0 / 10.0_f64.sqrt()).abs() < 1e-12);
        assert!((normalized["A2"]["C1"] - 3.0 / 10.0_f64.sqrt()).abs() < 1e-12);
        assert!((normalized["A1"]["C2"] - 2.0 / 20.0_f64.sqrt()).abs() < 1e-12);
        assert!((normalized["A2"]["C2"] - 4.0 / 20.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn zero_factor_column_normalizes_to_zero() {
        let request = TopsisRequest::builder()
            .criterion("C1", 0.5, CriterionType::Benefit)
            .criterion("C2", 0.5, CriterionType::Cost)
            .alternative("A1", vec![("C1", 0.0), ("C2", 2.0)])
            .alternative("A2", vec![("C1", 0.0), ("C2", 4.0)])
            .build();

        let factors = NormalizationFactorCalculator::compute(&request);
        let normalized = MatrixNormalizer::normalize(&request, &factors);

        assert_eq!(normalized["A1"]["C1"], 0.0);
        assert_eq!(normalized["A2"]["C1"], 0.0);
        // The non-degenerate column still normalizes.
        assert!(normalized["A1"]["C2"] > 0.0);
    }

    #[test]
    fn normalized_matrix_covers_every_pair() {
        let request = two_by_two_request();
        let factors = NormalizationFactorCalculator::compute(&request);
        let normalized = MatrixNormalizer::normalize(&request, &factors);

        assert_eq!(normalized.len(), 2);
        for row in normalized.values() {
            assert_eq!(row.len(), 2);
        }
    }
}
