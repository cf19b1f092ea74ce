//! Error types for the domain layer.

use thiserror::Error;

/// Reasons a TOPSIS request is rejected before any computation runs.
///
/// All variants describe a malformed request, not a transient fault; none
/// are retryable. Once validation passes, every downstream pipeline stage
/// is total and no other error class exists in the domain.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("no criteria provided")]
    EmptyCriteria,

    #[error("no alternatives provided")]
    EmptyAlternatives,

    #[error("criterion '{criterion}' has negative weight")]
    NegativeWeight { criterion: String },

    #[error("criterion weights must sum to 1.0, got {actual_sum}")]
    WeightSumMismatch { actual_sum: f64 },

    #[error("criterion '{criterion}' has invalid type '{given}'")]
    InvalidCriterionType { criterion: String, given: String },

    #[error("alternative '{alternative}' is missing a value for criterion '{criterion}'")]
    MissingValue {
        alternative: String,
        criterion: String,
    },
}

impl ValidationError {
    /// Creates a negative weight validation error.
    pub fn negative_weight(criterion: impl Into<String>) -> Self {
        ValidationError::NegativeWeight {
            criterion: criterion.into(),
        }
    }

    /// Creates a weight sum mismatch validation error.
    pub fn weight_sum_mismatch(actual_sum: f64) -> Self {
        ValidationError::WeightSumMismatch { actual_sum }
    }

    /// Creates an invalid criterion type validation error.
    pub fn invalid_criterion_type(criterion: impl Into<String>, given: impl Into<String>) -> Self {
        ValidationError::InvalidCriterionType {
            criterion: criterion.into(),
            given: given.into(),
        }
    }

    /// Creates a missing value validation error.
    pub fn missing_value(alternative: impl Into<String>, criterion: impl Into<String>) -> Self {
        ValidationError::MissingValue {
            alternative: alternative.into(),
            criterion: criterion.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_criteria_displays_correctly() {
        assert_eq!(format!("{}", ValidationError::EmptyCriteria), "no criteria provided");
    }

    #[test]
    fn negative_weight_names_the_criterion() {
        let err = ValidationError::negative_weight("Price");
        assert_eq!(format!("{}", err), "criterion 'Price' has negative weight");
    }

    #[test]
    fn weight_sum_mismatch_carries_actual_sum() {
        let err = ValidationError::weight_sum_mismatch(0.9);
        assert_eq!(format!("{}", err), "criterion weights must sum to 1.0, got 0.9");
    }

    #[test]
    fn invalid_criterion_type_names_both_parts() {
        let err = ValidationError::invalid_criterion_type("Price", "profit");
        assert_eq!(format!("{}", err), "criterion 'Price' has invalid type 'profit'");
    }

    #[test]
    fn missing_value_names_alternative_and_criterion() {
        let err = ValidationError::missing_value("Laptop A", "Price");
        assert_eq!(
            format!("{}", err),
            "alternative 'Laptop A' is missing a value for criterion 'Price'"
        );
    }
}
