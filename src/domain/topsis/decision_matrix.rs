//! Decision matrix - Core input structure for TOPSIS ranking.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::foundation::{CriterionType, ValidationError};

/// A named attribute alternatives are scored on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    pub name: String,
    pub weight: f64,
    #[serde(rename = "type")]
    pub criterion_type: CriterionType,
}

impl Criterion {
    /// Creates a new criterion.
    pub fn new(name: impl Into<String>, weight: f64, criterion_type: CriterionType) -> Self {
        Self {
            name: name.into(),
            weight,
            criterion_type,
        }
    }

    /// Creates a criterion from an untyped criterion-type string.
    ///
    /// This is the typed boundary for callers materializing requests from
    /// untrusted input: anything other than "benefit" or "cost" fails with
    /// `InvalidCriterionType` naming the criterion.
    pub fn try_new(
        name: impl Into<String>,
        weight: f64,
        criterion_type: &str,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let parsed = CriterionType::parse(criterion_type)
            .ok_or_else(|| ValidationError::invalid_criterion_type(&name, criterion_type))?;
        Ok(Self {
            name,
            weight,
            criterion_type: parsed,
        })
    }
}

/// An alternative with one value per criterion name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    pub name: String,
    /// Values keyed by criterion name. Must cover every criterion in the
    /// request; the validator rejects the request otherwise.
    pub values: HashMap<String, f64>,
}

impl Alternative {
    /// Creates a new alternative.
    pub fn new(name: impl Into<String>, values: HashMap<String, f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Gets this alternative's value for a criterion.
    pub fn value(&self, criterion: &str) -> Option<f64> {
        self.values.get(criterion).copied()
    }
}

/// The full decision problem: ordered criteria and ordered alternatives.
///
/// Both sequences keep their declaration order; that order drives every
/// deterministic iteration in the pipeline and the tie-break in ranking.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopsisRequest {
    pub criteria: Vec<Criterion>,
    pub alternatives: Vec<Alternative>,
}

impl TopsisRequest {
    /// Creates a request from criteria and alternatives.
    pub fn new(criteria: Vec<Criterion>, alternatives: Vec<Alternative>) -> Self {
        Self {
            criteria,
            alternatives,
        }
    }

    /// Creates a builder for constructing a request.
    pub fn builder() -> TopsisRequestBuilder {
        TopsisRequestBuilder::new()
    }

    /// Returns the number of criteria.
    pub fn criterion_count(&self) -> usize {
        self.criteria.len()
    }

    /// Returns the number of alternatives.
    pub fn alternative_count(&self) -> usize {
        self.alternatives.len()
    }
}

/// Builder for constructing TopsisRequest instances.
#[derive(Debug, Default)]
pub struct TopsisRequestBuilder {
    criteria: Vec<Criterion>,
    alternatives: Vec<Alternative>,
}

impl TopsisRequestBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a criterion.
    pub fn criterion(
        mut self,
        name: impl Into<String>,
        weight: f64,
        criterion_type: CriterionType,
    ) -> Self {
        self.criteria.push(Criterion::new(name, weight, criterion_type));
        self
    }

    /// Adds an alternative with its per-criterion values.
    pub fn alternative(
        mut self,
        name: impl Into<String>,
        values: Vec<(impl Into<String>, f64)>,
    ) -> Self {
        let values = values.into_iter().map(|(k, v)| (k.into(), v)).collect();
        self.alternatives.push(Alternative::new(name, values));
        self
    }

    /// Builds the request.
    pub fn build(self) -> TopsisRequest {
        TopsisRequest {
            criteria: self.criteria,
            alternatives: self.alternatives,
        }
    }
}
