//! Contact domain model.
//!
//! # Responsibility
//! - Define the contact record shown by the table and counted by charts.
//! - Provide display helpers shared by table columns and search.
//!
//! # Invariants
//! - `id` is stable and unique within one repository.
//! - `connection_date` is a calendar date, never timezone-adjusted.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Stable identifier of a contact inside one fixture.
pub type ContactId = u32;

/// Where a contact is based.
///
/// Flattened into the contact on the wire as `location_*` fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    #[serde(rename = "location_city")]
    pub city: String,
    #[serde(rename = "location_state")]
    pub state: String,
    #[serde(rename = "location_country")]
    pub country: String,
}

/// Current employer of a contact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Employer {
    #[serde(rename = "company_name")]
    pub name: String,
    /// Bare host name without scheme, e.g. `techcorp.com`.
    #[serde(rename = "company_website")]
    pub website: String,
    pub industry: String,
}

/// One professional-network connection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub first_name: String,
    pub last_name: String,
    pub linkedin_profile_url: String,
    #[serde(flatten)]
    pub location: Location,
    #[serde(flatten)]
    pub employer: Employer,
    pub current_role: String,
    pub email_address: Option<String>,
    /// Buying-role label, e.g. `Executive` or `Tech Practitioner`.
    pub buyer_persona_type: String,
    /// Day the connection was made; drives the velocity chart.
    pub connection_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl Contact {
    /// Returns `"first last"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns the table location column value: `"city, state, country"`.
    pub fn location_label(&self) -> String {
        format!(
            "{}, {}, {}",
            self.location.city, self.location.state, self.location.country
        )
    }

    pub fn country(&self) -> &str {
        self.location.country.as_str()
    }

    pub fn persona(&self) -> &str {
        self.buyer_persona_type.as_str()
    }
}
