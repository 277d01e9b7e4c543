//! Work-history entries attached to contacts.

use super::contact::ContactId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type ExperienceId = u32;

/// One past or current position of a contact.
///
/// `contact_id` is a lookup key, not ownership: experiences are resolved by
/// filtering the repository, and a contact may have none.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Experience {
    pub id: ExperienceId,
    pub contact_id: ContactId,
    pub company_name: String,
    pub position: String,
    pub start_date: NaiveDate,
    /// `None` while the position is ongoing.
    pub end_date: Option<NaiveDate>,
}

impl Experience {
    pub fn is_current(&self) -> bool {
        self.end_date.is_none()
    }
}
