//! Request validation - Structural and numeric preconditions.

use crate::domain::foundation::ValidationError;

use super::TopsisRequest;

/// Absolute tolerance for the criterion weight sum, accommodating
/// floating-point input such as three weights of 0.3333.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-4;

/// Validation of TOPSIS requests before any computation runs.
pub struct Validator;

impl Validator {
    /// Validates a request, returning the first failure encountered.
    ///
    /// Checks run in a fixed order, each producing a distinct reason:
    /// non-empty criteria, non-empty alternatives, no negative weight,
    /// weight sum within `WEIGHT_SUM_TOLERANCE` of 1.0, and a value for
    /// every (alternative, criterion) pair. Criterion types are already
    /// enforced by `CriterionType` at construction and cannot be invalid
    /// here.
    ///
    /// No side effects; a failure aborts the pipeline before any numeric
    /// stage runs.
    pub fn validate(request: &TopsisRequest) -> Result<(), ValidationError> {
        if request.criteria.is_empty() {
            return Err(ValidationError::EmptyCriteria);
        }
        if request.alternatives.is_empty() {
            return Err(ValidationError::EmptyAlternatives);
        }

        let mut weight_sum = 0.0;
        for criterion in &request.criteria {
            if criterion.weight < 0.0 {
                return Err(ValidationError::negative_weight(&criterion.name));
            }
            weight_sum += criterion.weight;
        }
        if (weight_sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ValidationError::weight_sum_mismatch(weight_sum));
        }

        for alternative in &request.alternatives {
            for criterion in &request.criteria {
                if !alternative.values.contains_key(&criterion.name) {
                    return Err(ValidationError::missing_value(
                        &alternative.name,
                        &criterion.name,
                    ));
                }
            }
        }

        Ok(())
    }
}
