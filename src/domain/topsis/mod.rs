//! TOPSIS Module - Pure domain services for multi-criteria ranking.
//!
//! This module contains stateless functions that take a decision matrix
//! (weighted, typed criteria x alternatives) and produce a closeness score
//! and rank per alternative.
//!
//! # Components
//!
//! - `TopsisRequest` - Core input structure: criteria and alternatives
//! - `Validator` - Structural and numeric preconditions on the request
//! - `NormalizationFactorCalculator` - Per-criterion Euclidean column norms
//! - `MatrixNormalizer` - Divides values by the per-criterion norm
//! - `WeightedMatrixBuilder` - Multiplies normalized values by weights
//! - `IdealSolutionResolver` - Positive/negative ideal reference vectors
//! - `SeparationCalculator` - Euclidean distance to both reference vectors
//! - `ClosenessRanker` - Closeness coefficient and ranked result list
//! - `TopsisPipeline` - Sequences the stages and assembles the response
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and stateless. Data flows
//! strictly forward through the stage list; no stage re-enters an earlier
//! one. Every intermediate structure is built fresh per run and never
//! mutated afterwards, so concurrent runs over independent requests need
//! no coordination.

mod decision_matrix;
mod ideal_solution;
mod normalization;
mod pipeline;
mod ranking;
mod separation;
mod validator;
mod weighting;

// Re-export all public types
pub use decision_matrix::{Alternative, Criterion, TopsisRequest, TopsisRequestBuilder};
pub use ideal_solution::{IdealSolution, IdealSolutionResolver};
pub use normalization::{
    MatrixNormalizer, NormalizationFactorCalculator, NormalizationFactors, NormalizedMatrix,
};
pub use pipeline::{compute_topsis, TopsisPipeline, TopsisResponse};
pub use ranking::{ClosenessRanker, TopsisResult};
pub use separation::{SeparationCalculator, SeparationMeasures};
pub use validator::{Validator, WEIGHT_SUM_TOLERANCE};
pub use weighting::{WeightedMatrix, WeightedMatrixBuilder};
