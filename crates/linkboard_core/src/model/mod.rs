//! Domain records for the contact network.
//!
//! # Responsibility
//! - Define the canonical contact/experience records consumed by every view.
//! - Keep the flat fixture field names as the serialized wire shape.
//!
//! # Invariants
//! - Records are immutable once loaded into a repository.
//! - `ContactId` is unique per repository; experiences refer to it weakly.

pub mod contact;
pub mod experience;
