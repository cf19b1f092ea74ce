//! Topsis Engine - Multi-criteria decision ranking.
//!
//! This crate implements the TOPSIS method (Technique for Order Preference
//! by Similarity to Ideal Solution): alternatives are scored against
//! weighted benefit/cost criteria and ranked by their closeness to an ideal
//! solution.

pub mod adapters;
pub mod domain;
pub mod ports;
