//! Monthly connection velocity.
//!
//! # Invariants
//! - Output always has exactly 12 entries, January first.
//! - Months are taken from the calendar date as stored; no timezone shift.
//! - Peak month ties resolve to the earliest month.

use super::{round_one_decimal, Selection};
use crate::model::contact::Contact;
use chrono::Datelike;
use serde::Serialize;

pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Connections made in one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthCount {
    pub month: &'static str,
    /// Zero-based month index, `0 = January`.
    pub month_index: u8,
    pub count: usize,
}

/// Scalars shown next to the velocity chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VelocityStats {
    pub total: usize,
    /// `total / 12`, one decimal place.
    pub average_per_month: f64,
    pub peak_month: MonthCount,
    /// Months with at least one connection.
    pub active_months: usize,
}

impl VelocityStats {
    pub fn from_months(months: &[MonthCount; 12]) -> Self {
        let total = months.iter().map(|month| month.count).sum::<usize>();
        let mut peak = months[0];
        for month in &months[1..] {
            if month.count > peak.count {
                peak = *month;
            }
        }

        Self {
            total,
            average_per_month: round_one_decimal(total as f64 / 12.0),
            peak_month: peak,
            active_months: months.iter().filter(|month| month.count > 0).count(),
        }
    }
}

/// Buckets the contacts connected during `year` by month.
///
/// When `persona` is not [`Selection::All`], only contacts with exactly that
/// persona are counted.
pub fn monthly_velocity(contacts: &[Contact], year: i32, persona: &Selection) -> [MonthCount; 12] {
    let mut months: [MonthCount; 12] = std::array::from_fn(|index| MonthCount {
        month: MONTH_LABELS[index],
        month_index: index as u8,
        count: 0,
    });

    for contact in contacts {
        let date = contact.connection_date;
        if date.year() != year || !persona.matches(contact.persona()) {
            continue;
        }
        months[date.month0() as usize].count += 1;
    }

    months
}
