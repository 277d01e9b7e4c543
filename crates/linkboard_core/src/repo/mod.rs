//! Read-only record store.
//!
//! # Responsibility
//! - Define the repository contract every view computation reads from.
//! - Provide the in-memory implementation and the compiled-in fixture.
//!
//! # Invariants
//! - Repositories never mutate after construction.
//! - Externally loaded fixtures are validated before they become visible.

pub mod contact_repo;
pub mod fixture;
