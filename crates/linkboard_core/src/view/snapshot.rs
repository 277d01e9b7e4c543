//! Derived view data for each sidebar tab.
//!
//! # Responsibility
//! - Turn `(repository, view state)` into the datasets a tab renders.
//!
//! # Invariants
//! - Builders are pure; every call recomputes from the repository.
//! - Snapshots own their data and outlive the state that produced them.

use super::state::{ActiveTab, ChartType, SortSpec, ViewState};
use super::table::{filter_and_sort, TableQuery};
use crate::aggregate::category::{
    group_by_dimension, top_category, CategoryCount, CategoryDimension,
};
use crate::aggregate::summary::{
    available_countries, available_personas, available_years, DashboardSummary,
};
use crate::aggregate::velocity::{monthly_velocity, MonthCount, VelocityStats};
use crate::aggregate::Selection;
use crate::model::contact::Contact;
use crate::repo::contact_repo::ContactRepository;
use serde::Serialize;

/// Categorical distribution chart data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionView {
    pub dimension: CategoryDimension,
    pub chart_type: ChartType,
    pub title: &'static str,
    /// First-seen order.
    pub entries: Vec<CategoryCount>,
    pub total: usize,
    pub top_category: Option<CategoryCount>,
}

impl DistributionView {
    pub fn category_count(&self) -> usize {
        self.entries.len()
    }
}

/// Monthly velocity chart data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VelocityView {
    pub year: i32,
    pub persona: Selection,
    pub months: [MonthCount; 12],
    pub stats: VelocityStats,
    pub available_years: Vec<i32>,
    pub available_personas: Vec<String>,
}

/// Contact table rows plus the filter options offered above it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableView {
    pub rows: Vec<Contact>,
    /// Row count before filtering.
    pub total_contacts: usize,
    pub persona: Selection,
    pub country: Selection,
    pub search_text: String,
    pub sort: Option<SortSpec>,
    pub available_personas: Vec<String>,
    pub available_countries: Vec<String>,
}

/// Overview tab: headline stats plus both charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub summary: DashboardSummary,
    pub distribution: DistributionView,
    pub velocity: VelocityView,
}

/// Recomputed data for the active tab.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "tab", content = "view", rename_all = "snake_case")]
pub enum ViewSnapshot {
    Dashboard(DashboardView),
    Connections(TableView),
    Analytics(DistributionView),
    Velocity(VelocityView),
}

impl ViewSnapshot {
    pub fn tab(&self) -> ActiveTab {
        match self {
            Self::Dashboard(_) => ActiveTab::Dashboard,
            Self::Connections(_) => ActiveTab::Connections,
            Self::Analytics(_) => ActiveTab::Analytics,
            Self::Velocity(_) => ActiveTab::Velocity,
        }
    }

    /// Number of primary items: table rows, chart entries or connections.
    pub fn item_count(&self) -> usize {
        match self {
            Self::Dashboard(view) => view.summary.total_connections,
            Self::Connections(view) => view.rows.len(),
            Self::Analytics(view) => view.entries.len(),
            Self::Velocity(view) => view.stats.total,
        }
    }
}

pub fn build_distribution_view<R: ContactRepository>(
    repo: &R,
    state: &ViewState,
) -> DistributionView {
    let contacts = repo.list_contacts();
    let entries = group_by_dimension(contacts, state.dimension);
    let top = top_category(&entries).cloned();

    DistributionView {
        dimension: state.dimension,
        chart_type: state.chart_type,
        title: state.dimension.title(),
        total: contacts.len(),
        top_category: top,
        entries,
    }
}

pub fn build_velocity_view<R: ContactRepository>(repo: &R, state: &ViewState) -> VelocityView {
    let contacts = repo.list_contacts();
    let months = monthly_velocity(contacts, state.selected_year, &state.persona_filter);

    VelocityView {
        year: state.selected_year,
        persona: state.persona_filter.clone(),
        stats: VelocityStats::from_months(&months),
        months,
        available_years: available_years(contacts),
        available_personas: available_personas(contacts),
    }
}

pub fn build_table_view<R: ContactRepository>(repo: &R, state: &ViewState) -> TableView {
    let contacts = repo.list_contacts();
    let query = TableQuery {
        persona: &state.persona_filter,
        country: &state.country_filter,
        search_text: &state.search_text,
        sort: state.sort,
    };

    TableView {
        rows: filter_and_sort(contacts, &query).into_iter().cloned().collect(),
        total_contacts: contacts.len(),
        persona: state.persona_filter.clone(),
        country: state.country_filter.clone(),
        search_text: state.search_text.clone(),
        sort: state.sort,
        available_personas: available_personas(contacts),
        available_countries: available_countries(contacts),
    }
}

pub fn build_dashboard_view<R: ContactRepository>(repo: &R, state: &ViewState) -> DashboardView {
    DashboardView {
        summary: DashboardSummary::from_contacts(repo.list_contacts()),
        distribution: build_distribution_view(repo, state),
        velocity: build_velocity_view(repo, state),
    }
}

/// Computes only the datasets `state.active_tab` renders.
pub fn build_snapshot<R: ContactRepository>(repo: &R, state: &ViewState) -> ViewSnapshot {
    match state.active_tab {
        ActiveTab::Dashboard => ViewSnapshot::Dashboard(build_dashboard_view(repo, state)),
        ActiveTab::Connections => ViewSnapshot::Connections(build_table_view(repo, state)),
        ActiveTab::Analytics => ViewSnapshot::Analytics(build_distribution_view(repo, state)),
        ActiveTab::Velocity => ViewSnapshot::Velocity(build_velocity_view(repo, state)),
    }
}
