//! Categorical breakdowns (country and persona distributions).

use super::percentage;
use crate::model::contact::Contact;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One slice of a categorical breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCount {
    pub label: String,
    pub count: usize,
    /// Share of the input in percent, one decimal place.
    pub percentage: f64,
}

/// Field a distribution chart groups by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryDimension {
    #[default]
    Country,
    Persona,
}

impl CategoryDimension {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Country => "country",
            Self::Persona => "persona",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "country" => Some(Self::Country),
            "persona" => Some(Self::Persona),
            _ => None,
        }
    }

    /// Chart heading for this dimension.
    pub fn title(self) -> &'static str {
        match self {
            Self::Country => "Country-wise Distribution",
            Self::Persona => "Buyer Persona Distribution",
        }
    }

    /// Grouping key of `contact` under this dimension.
    pub fn key(self, contact: &Contact) -> &str {
        match self {
            Self::Country => contact.country(),
            Self::Persona => contact.persona(),
        }
    }
}

/// Partitions `contacts` by `key_fn`, one entry per distinct key.
///
/// Entries appear in first-seen key order. Each `percentage` is relative to
/// `contacts.len()` and is `0.0` for an empty input.
pub fn group_by_category<F>(contacts: &[Contact], key_fn: F) -> Vec<CategoryCount>
where
    F: Fn(&Contact) -> &str,
{
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut buckets: Vec<(&str, usize)> = Vec::new();

    for contact in contacts {
        let key = key_fn(contact);
        match positions.get(key) {
            Some(&index) => buckets[index].1 += 1,
            None => {
                positions.insert(key, buckets.len());
                buckets.push((key, 1));
            }
        }
    }

    let total = contacts.len();
    buckets
        .into_iter()
        .map(|(label, count)| CategoryCount {
            label: label.to_string(),
            count,
            percentage: percentage(count, total),
        })
        .collect()
}

/// Breakdown of `contacts` along `dimension`.
pub fn group_by_dimension(
    contacts: &[Contact],
    dimension: CategoryDimension,
) -> Vec<CategoryCount> {
    group_by_category(contacts, |contact| dimension.key(contact))
}

/// Entry with the highest count; ties go to the earliest entry.
pub fn top_category(entries: &[CategoryCount]) -> Option<&CategoryCount> {
    entries.iter().fold(None, |best: Option<&CategoryCount>, entry| match best {
        Some(current) if current.count >= entry.count => Some(current),
        _ => Some(entry),
    })
}

/// Copy of `entries` ordered by descending count, stable for ties.
pub fn sorted_by_count(entries: &[CategoryCount]) -> Vec<CategoryCount> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|left, right| right.count.cmp(&left.count));
    sorted
}

#[cfg(test)]
mod tests {
    use super::{sorted_by_count, top_category, CategoryCount, CategoryDimension};

    fn entry(label: &str, count: usize) -> CategoryCount {
        CategoryCount {
            label: label.to_string(),
            count,
            percentage: 0.0,
        }
    }

    #[test]
    fn top_category_prefers_first_seen_on_ties() {
        let entries = vec![entry("a", 2), entry("b", 3), entry("c", 3)];
        assert_eq!(top_category(&entries).map(|e| e.label.as_str()), Some("b"));
        assert!(top_category(&[]).is_none());
    }

    #[test]
    fn sorted_by_count_is_stable() {
        let entries = vec![entry("a", 1), entry("b", 2), entry("c", 1)];
        let labels: Vec<_> = sorted_by_count(&entries)
            .into_iter()
            .map(|e| e.label)
            .collect();
        assert_eq!(labels, vec!["b", "a", "c"]);
    }

    #[test]
    fn dimension_parse_is_case_insensitive() {
        assert_eq!(CategoryDimension::parse(" Persona "), Some(CategoryDimension::Persona));
        assert_eq!(CategoryDimension::parse("industry"), None);
    }
}
