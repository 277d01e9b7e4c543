//! Serializable view state for the dashboard screen.
//!
//! # Invariants
//! - Every field is independently settable; there is no cross-field coupling.
//! - `selected_year` defaults to the latest connection year in the data.

use crate::aggregate::category::CategoryDimension;
use crate::aggregate::summary::available_years;
use crate::aggregate::Selection;
use crate::model::contact::Contact;
use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};

/// Sidebar destination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActiveTab {
    #[default]
    Dashboard,
    Connections,
    Analytics,
    Velocity,
}

/// One sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub tab: ActiveTab,
    pub label: &'static str,
    pub description: &'static str,
}

impl ActiveTab {
    /// Sidebar order.
    pub const ALL: [ActiveTab; 4] = [
        ActiveTab::Dashboard,
        ActiveTab::Connections,
        ActiveTab::Analytics,
        ActiveTab::Velocity,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Connections => "connections",
            Self::Analytics => "analytics",
            Self::Velocity => "velocity",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.as_str().eq_ignore_ascii_case(value.trim()))
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Connections => "Connections",
            Self::Analytics => "Analytics",
            Self::Velocity => "Connection Velocity",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Dashboard => "Overview & Analytics",
            Self::Connections => "Manage Contacts",
            Self::Analytics => "Charts & Insights",
            Self::Velocity => "Growth Tracking",
        }
    }

    /// Sidebar entries in display order.
    pub fn navigation() -> Vec<NavItem> {
        Self::ALL
            .into_iter()
            .map(|tab| NavItem {
                tab,
                label: tab.label(),
                description: tab.description(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartType {
    #[default]
    Pie,
    Bar,
}

impl ChartType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pie => "pie",
            Self::Bar => "bar",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pie" => Some(Self::Pie),
            "bar" => Some(Self::Bar),
            _ => None,
        }
    }
}

/// Sortable contact table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    FirstName,
    LastName,
    Company,
    Country,
    Persona,
    ConnectionDate,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Company => "company",
            Self::Country => "country",
            Self::Persona => "persona",
            Self::ConnectionDate => "connection_date",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "first_name" => Some(Self::FirstName),
            "last_name" => Some(Self::LastName),
            "company" | "company_name" => Some(Self::Company),
            "country" | "location_country" => Some(Self::Country),
            "persona" | "buyer_persona_type" => Some(Self::Persona),
            "connection_date" => Some(Self::ConnectionDate),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn asc(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Desc,
        }
    }
}

/// All user-controlled state of the dashboard screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub active_tab: ActiveTab,
    pub chart_type: ChartType,
    pub dimension: CategoryDimension,
    pub selected_year: i32,
    pub persona_filter: Selection,
    pub country_filter: Selection,
    pub search_text: String,
    /// `None` keeps filter-pass order.
    pub sort: Option<SortSpec>,
    pub sidebar_collapsed: bool,
}

impl ViewState {
    /// Default state with an explicit year.
    pub fn with_year(selected_year: i32) -> Self {
        Self {
            active_tab: ActiveTab::default(),
            chart_type: ChartType::default(),
            dimension: CategoryDimension::default(),
            selected_year,
            persona_filter: Selection::All,
            country_filter: Selection::All,
            search_text: String::new(),
            sort: None,
            sidebar_collapsed: false,
        }
    }

    /// Default state for a data set.
    ///
    /// Picks the latest connection year; an empty data set falls back to the
    /// current local year.
    pub fn for_contacts(contacts: &[Contact]) -> Self {
        let year = available_years(contacts)
            .last()
            .copied()
            .unwrap_or_else(|| Local::now().year());
        Self::with_year(year)
    }
}
