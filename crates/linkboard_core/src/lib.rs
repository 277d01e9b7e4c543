//! Core data layer for the contact-network dashboard.
//! All chart, table and view-state semantics live in this crate.

pub mod aggregate;
pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod view;

pub use aggregate::category::{
    group_by_category, group_by_dimension, sorted_by_count, top_category, CategoryCount,
    CategoryDimension,
};
pub use aggregate::summary::{
    available_countries, available_personas, available_years, greeting_for_hour,
    DashboardSummary,
};
pub use aggregate::velocity::{monthly_velocity, MonthCount, VelocityStats, MONTH_LABELS};
pub use aggregate::{percentage, Selection};
pub use config::{ConfigError, DashboardConfig};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::contact::{Contact, ContactId, Employer, Location};
pub use model::experience::{Experience, ExperienceId};
pub use repo::contact_repo::{
    ContactRepository, FixtureDocument, FixtureVersion, InMemoryContactRepository, RepoError,
    RepoResult,
};
pub use view::controller::{DashboardController, ViewResult, ViewStateError};
pub use view::snapshot::{
    build_snapshot, DashboardView, DistributionView, TableView, VelocityView, ViewSnapshot,
};
pub use view::state::{
    ActiveTab, ChartType, NavItem, SortDirection, SortKey, SortSpec, ViewState,
};
pub use view::table::{filter_and_sort, searchable_text, TableQuery};

/// Health-check probe for UI integration.
pub fn ping() -> &'static str {
    "pong"
}

pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
