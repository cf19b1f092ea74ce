//! Calculation store port.
//!
//! Defines the contract for persisting TOPSIS calculations.
//!
//! # Design
//!
//! Implementations store the **raw request inputs verbatim** - criteria,
//! weights, alternative names, and the value matrix - never derived
//! values. On retrieval, callers reconstruct the request and re-run the
//! pipeline, so results always reflect the current algorithm rather than
//! whatever was computed at save time.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::Timestamp;
use crate::domain::topsis::TopsisRequest;

/// A named calculation stored as its raw inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredCalculation {
    pub name: String,
    pub request: TopsisRequest,
    pub saved_at: Timestamp,
}

impl StoredCalculation {
    /// Creates a stored calculation stamped with the current time.
    pub fn new(name: impl Into<String>, request: TopsisRequest) -> Self {
        Self {
            name: name.into(),
            request,
            saved_at: Timestamp::now(),
        }
    }
}

/// Errors surfaced by calculation store implementations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    #[error("calculation '{name}' not found")]
    NotFound { name: String },

    #[error("calculation '{name}' already exists")]
    DuplicateName { name: String },
}

impl StoreError {
    /// Creates a not found store error.
    pub fn not_found(name: impl Into<String>) -> Self {
        StoreError::NotFound { name: name.into() }
    }

    /// Creates a duplicate name store error.
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        StoreError::DuplicateName { name: name.into() }
    }
}

/// Port for persisting and retrieving TOPSIS calculations by name.
#[async_trait]
pub trait CalculationStore: Send + Sync {
    /// Saves a calculation under its name.
    ///
    /// # Errors
    ///
    /// - `DuplicateName` if a calculation with the same name exists
    async fn save(&self, calculation: &StoredCalculation) -> Result<(), StoreError>;

    /// Finds a stored calculation by name.
    ///
    /// Returns `None` if not found.
    async fn find_by_name(&self, name: &str) -> Result<Option<StoredCalculation>, StoreError>;

    /// Lists the names of all stored calculations.
    async fn list_names(&self) -> Result<Vec<String>, StoreError>;

    /// Deletes a stored calculation.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no calculation with the name exists
    async fn delete(&self, name: &str) -> Result<(), StoreError>;
}
