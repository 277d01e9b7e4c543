//! Contact table filtering, search and sorting.
//!
//! # Responsibility
//! - Apply persona/country filters, free-text search and column sort.
//!
//! # Invariants
//! - Filters and search are conjunctive.
//! - Sorting is stable in both directions; no sort keeps filter-pass order.
//! - Search covers exactly the columns listed in [`searchable_text`].

use super::state::{SortDirection, SortKey, SortSpec};
use crate::aggregate::Selection;
use crate::model::contact::Contact;
use std::cmp::Ordering;

/// Parameters of one table computation.
#[derive(Debug, Clone, Copy)]
pub struct TableQuery<'a> {
    pub persona: &'a Selection,
    pub country: &'a Selection,
    pub search_text: &'a str,
    pub sort: Option<SortSpec>,
}

/// Returns the contacts passing `query`, in display order.
pub fn filter_and_sort<'c>(contacts: &'c [Contact], query: &TableQuery<'_>) -> Vec<&'c Contact> {
    let needle = query.search_text.trim().to_lowercase();

    let mut rows: Vec<&Contact> = contacts
        .iter()
        .filter(|contact| query.persona.matches(contact.persona()))
        .filter(|contact| query.country.matches(contact.country()))
        .filter(|contact| needle.is_empty() || matches_search(contact, &needle))
        .collect();

    if let Some(sort) = query.sort {
        rows.sort_by(|left, right| {
            let ordering = compare_by_key(left, right, sort.key);
            match sort.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
    }

    rows
}

/// Column values the free-text search looks at.
///
/// Profile URL and company website render as links and are not searched.
pub fn searchable_text(contact: &Contact) -> [String; 9] {
    [
        contact.first_name.clone(),
        contact.last_name.clone(),
        contact.location_label(),
        contact.employer.name.clone(),
        contact.employer.industry.clone(),
        contact.current_role.clone(),
        contact.email_address.clone().unwrap_or_default(),
        contact.buyer_persona_type.clone(),
        contact.connection_date.format("%Y-%m-%d").to_string(),
    ]
}

/// `needle` must already be lowercase.
fn matches_search(contact: &Contact, needle: &str) -> bool {
    searchable_text(contact)
        .iter()
        .any(|value| value.to_lowercase().contains(needle))
}

fn compare_by_key(left: &Contact, right: &Contact, key: SortKey) -> Ordering {
    match key {
        SortKey::FirstName => compare_text(&left.first_name, &right.first_name),
        SortKey::LastName => compare_text(&left.last_name, &right.last_name),
        SortKey::Company => compare_text(&left.employer.name, &right.employer.name),
        SortKey::Country => compare_text(left.country(), right.country()),
        SortKey::Persona => compare_text(left.persona(), right.persona()),
        SortKey::ConnectionDate => left.connection_date.cmp(&right.connection_date),
    }
}

fn compare_text(left: &str, right: &str) -> Ordering {
    left.to_lowercase().cmp(&right.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::compare_text;
    use std::cmp::Ordering;

    #[test]
    fn text_comparison_ignores_case() {
        assert_eq!(compare_text("McLean", "mclean"), Ordering::Equal);
        assert_eq!(compare_text("brown", "Chen"), Ordering::Less);
    }
}
