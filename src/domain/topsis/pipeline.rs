//! Pipeline orchestration - Sequences the TOPSIS stages into a response.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::foundation::ValidationError;

use super::{
    ClosenessRanker, IdealSolutionResolver, MatrixNormalizer, NormalizationFactorCalculator,
    SeparationCalculator, TopsisRequest, TopsisResult, Validator, WeightedMatrixBuilder,
};

/// Full outcome of a TOPSIS run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopsisResponse {
    /// Per-alternative results ordered by rank ascending - the only
    /// externally meaningful ordering in the response.
    pub results: Vec<TopsisResult>,
    pub ideal_positive: HashMap<String, f64>,
    pub ideal_negative: HashMap<String, f64>,
    pub normalization_factors: HashMap<String, f64>,
}

/// Sequences validation and the computation stages exactly once per call.
pub struct TopsisPipeline;

impl TopsisPipeline {
    /// Runs the full pipeline over a request.
    ///
    /// Fails fast with the validator's error; after validation every stage
    /// is a total function, so no other failure can occur. Each call
    /// builds fresh intermediate structures and shares nothing with other
    /// calls, so concurrent runs need no coordination as long as the
    /// request itself is not mutated during the call.
    pub fn run(request: &TopsisRequest) -> Result<TopsisResponse, ValidationError> {
        Validator::validate(request)?;

        let factors = NormalizationFactorCalculator::compute(request);
        let normalized = MatrixNormalizer::normalize(request, &factors);
        let weighted = WeightedMatrixBuilder::build(&normalized, &request.criteria);
        let ideal = IdealSolutionResolver::resolve(&weighted, &request.criteria);
        let measures = SeparationCalculator::compute(&weighted, &ideal, &request.criteria);
        let results =
            ClosenessRanker::rank(&request.alternatives, &measures, &normalized, &weighted);

        Ok(TopsisResponse {
            results,
            ideal_positive: ideal.positive,
            ideal_negative: ideal.negative,
            normalization_factors: factors,
        })
    }
}

/// Computes a TOPSIS ranking for the given request.
///
/// The crate's single entry point: validates the request, then runs
/// normalization, weighting, ideal-solution resolution, separation
/// measures, and closeness ranking.
pub fn compute_topsis(request: &TopsisRequest) -> Result<TopsisResponse, ValidationError> {
    TopsisPipeline::run(request)
}
