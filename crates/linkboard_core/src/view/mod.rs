//! Dashboard view layer.
//!
//! # Responsibility
//! - Hold the screen's view state in one serializable structure.
//! - Derive table rows and chart datasets for the active tab.
//!
//! # Invariants
//! - Recomputation is synchronous; no cached result outlives a state change.

pub mod controller;
pub mod snapshot;
pub mod state;
pub mod table;
