//! In-memory calculation store implementation.
//!
//! This adapter provides an in-memory implementation of the
//! `CalculationStore` port. Useful for:
//! - Development and testing environments
//! - Demonstration and prototyping
//! - Single-process embeddings without persistence requirements
//!
//! For deployments requiring durable history, use a database-backed
//! implementation instead.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;
use tracing::debug;

use crate::ports::{CalculationStore, StoreError, StoredCalculation};

/// In-memory implementation of the `CalculationStore` port.
///
/// Thread-safe via internal `RwLock`. Does not persist data across
/// restarts.
#[derive(Default)]
pub struct InMemoryCalculationStore {
    calculations: RwLock<HashMap<String, StoredCalculation>>,
}

impl InMemoryCalculationStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored calculations.
    pub fn len(&self) -> usize {
        self.calculations.read().unwrap().len()
    }

    /// Returns true if no calculations are stored.
    pub fn is_empty(&self) -> bool {
        self.calculations.read().unwrap().is_empty()
    }
}

#[async_trait]
impl CalculationStore for InMemoryCalculationStore {
    async fn save(&self, calculation: &StoredCalculation) -> Result<(), StoreError> {
        let mut calculations = self.calculations.write().unwrap();
        if calculations.contains_key(&calculation.name) {
            return Err(StoreError::duplicate_name(&calculation.name));
        }
        calculations.insert(calculation.name.clone(), calculation.clone());
        debug!(name = %calculation.name, "stored calculation");
        Ok(())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<StoredCalculation>, StoreError> {
        let found = self.calculations.read().unwrap().get(name).cloned();
        debug!(name = %name, found = found.is_some(), "looked up calculation");
        Ok(found)
    }

    async fn list_names(&self) -> Result<Vec<String>, StoreError> {
        let mut names: Vec<String> = self.calculations.read().unwrap().keys().cloned().collect();
        names.sort();
        Ok(names)
    }

    async fn delete(&self, name: &str) -> Result<(), StoreError> {
        let mut calculations = self.calculations.write().unwrap();
        if calculations.remove(name).is_none() {
            return Err(StoreError::not_found(name));
        }
        debug!(name = %name, "deleted calculation");
        Ok(())
    }
}
