//! Headline statistics and filter option lists.

use super::distinct_in_order;
use crate::model::contact::Contact;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::BTreeSet;

/// Welcome-card statistics derived from the whole store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub total_connections: usize,
    pub countries: usize,
    pub personas: usize,
    /// Connections made in the month of the most recent connection.
    pub latest_month_connections: usize,
    pub latest_connection: Option<NaiveDate>,
}

impl DashboardSummary {
    pub fn from_contacts(contacts: &[Contact]) -> Self {
        let latest_connection = contacts.iter().map(|contact| contact.connection_date).max();
        let latest_month_connections = match latest_connection {
            Some(latest) => contacts
                .iter()
                .filter(|contact| {
                    contact.connection_date.year() == latest.year()
                        && contact.connection_date.month() == latest.month()
                })
                .count(),
            None => 0,
        };

        Self {
            total_connections: contacts.len(),
            countries: available_countries(contacts).len(),
            personas: available_personas(contacts).len(),
            latest_month_connections,
            latest_connection,
        }
    }
}

/// Distinct connection years, ascending.
pub fn available_years(contacts: &[Contact]) -> Vec<i32> {
    contacts
        .iter()
        .map(|contact| contact.connection_date.year())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Distinct personas in first-seen order.
pub fn available_personas(contacts: &[Contact]) -> Vec<String> {
    distinct_in_order(contacts, Contact::persona)
}

/// Distinct countries in first-seen order.
pub fn available_countries(contacts: &[Contact]) -> Vec<String> {
    distinct_in_order(contacts, Contact::country)
}

/// Time-of-day greeting for a local `hour` in `0..24`.
pub fn greeting_for_hour(hour: u32) -> &'static str {
    if hour < 12 {
        "Good Morning"
    } else if hour < 18 {
        "Good Afternoon"
    } else {
        "Good Evening"
    }
}
