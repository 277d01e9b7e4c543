//! Pure aggregation over contact slices.
//!
//! # Responsibility
//! - Derive chart datasets (category breakdowns, monthly velocity).
//! - Derive summary statistics and the option lists offered by filters.
//!
//! # Invariants
//! - Every function is total over well-formed input; none of them fail.
//! - Counts of a breakdown always sum to the size of the filtered input.
//! - Percentages of an empty input are `0.0`, never NaN.

pub mod category;
pub mod summary;
pub mod velocity;

use crate::model::contact::Contact;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Wire value of [`Selection::All`].
///
/// Reserved: a persona or country labelled exactly `all` could never be
/// selected, so fixture validation rejects it.
pub const SELECTION_ALL: &str = "all";

/// Exact-match filter over one categorical field.
///
/// Serialized as the bare label, with `"all"` meaning no filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    pub fn only(value: impl Into<String>) -> Self {
        Self::Only(value.into())
    }

    /// Returns whether `value` passes this filter.
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == value,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => SELECTION_ALL,
            Self::Only(value) => value.as_str(),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl From<&str> for Selection {
    fn from(value: &str) -> Self {
        if value == SELECTION_ALL {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }
}

impl From<String> for Selection {
    fn from(value: String) -> Self {
        if value == SELECTION_ALL {
            Self::All
        } else {
            Self::Only(value)
        }
    }
}

impl From<Selection> for String {
    fn from(value: Selection) -> Self {
        match value {
            Selection::All => SELECTION_ALL.to_string(),
            Selection::Only(label) => label,
        }
    }
}

impl Display for Selection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Computes `100 * part / whole` rounded to one decimal place.
///
/// Returns `0.0` when `whole` is zero.
pub fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    round_one_decimal(part as f64 / whole as f64 * 100.0)
}

pub(crate) fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Distinct values of `key_fn` in first-seen order.
pub(crate) fn distinct_in_order<F>(contacts: &[Contact], key_fn: F) -> Vec<String>
where
    F: Fn(&Contact) -> &str,
{
    let mut seen: Vec<String> = Vec::new();
    for contact in contacts {
        let key = key_fn(contact);
        if !seen.iter().any(|existing| existing == key) {
            seen.push(key.to_string());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::{percentage, Selection};

    #[test]
    fn percentage_of_empty_whole_is_zero() {
        assert_eq!(percentage(0, 0), 0.0);
        assert_eq!(percentage(3, 0), 0.0);
    }

    #[test]
    fn percentage_rounds_to_one_decimal() {
        assert_eq!(percentage(1, 8), 12.5);
        assert_eq!(percentage(1, 3), 33.3);
        assert_eq!(percentage(2, 3), 66.7);
    }

    #[test]
    fn selection_parses_all_keyword() {
        assert_eq!(Selection::from("all"), Selection::All);
        assert_eq!(Selection::from("Canada"), Selection::only("Canada"));
        assert!(Selection::All.matches("anything"));
        assert!(!Selection::only("Spain").matches("spain"));
    }
}
