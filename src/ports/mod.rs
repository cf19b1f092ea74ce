//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! The computation core itself needs no ports (it is pure and does no
//! I/O); the only contract here is `CalculationStore`, the boundary for
//! collaborators that persist calculations.

mod calculation_store;

pub use calculation_store::{CalculationStore, StoreError, StoredCalculation};
