//! FFI use-case API for the dashboard UI shell.
//!
//! # Responsibility
//! - Expose one sync call per dashboard view to Dart via FRB.
//! - Keep view state on the UI side; each call carries the values it needs.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Failures are reported through the envelope `message`, never thrown.
//! - The record store is loaded once per process from `LINKBOARD_*` config.

use linkboard_core::{
    core_version as core_version_inner, greeting_for_hour, init_logging as init_logging_inner,
    ping as ping_inner, ActiveTab, CategoryDimension, ChartType, Contact, DashboardConfig,
    DashboardController, DashboardSummary, InMemoryContactRepository, Selection, SortKey,
    SortSpec, ViewSnapshot, ViewStateError,
};
use log::warn;
use once_cell::sync::OnceCell;

static STORE: OnceCell<InMemoryContactRepository> = OnceCell::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Core crate version.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and an error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Sidebar entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    /// Stable tab id (`dashboard|connections|analytics|velocity`).
    pub id: String,
    pub label: String,
    pub description: String,
}

/// Welcome-card statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryResponse {
    pub greeting: String,
    pub total_connections: u32,
    pub countries: u32,
    pub personas: u32,
    pub latest_month_connections: u32,
    /// `YYYY-MM-DD`, absent for an empty store.
    pub latest_connection: Option<String>,
    pub message: String,
}

/// One slice of a distribution chart.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryItem {
    pub label: String,
    pub count: u32,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DistributionResponse {
    pub title: String,
    /// `pie|bar`, echoing the applied chart type.
    pub chart_type: String,
    pub entries: Vec<CategoryItem>,
    pub total: u32,
    pub top_label: Option<String>,
    pub top_count: u32,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthItem {
    pub month: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VelocityResponse {
    /// Applied year.
    pub year: i32,
    /// Always 12 entries on success, empty on failure.
    pub months: Vec<MonthItem>,
    pub total: u32,
    pub average_per_month: f64,
    pub peak_month: String,
    /// Connections in the peak month.
    pub peak_count: u32,
    /// Months with at least one connection, out of 12.
    pub active_months: u32,
    pub available_years: Vec<i32>,
    pub available_personas: Vec<String>,
    pub message: String,
}

/// Contact table request; mirrors the table's filter bar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionsRequest {
    /// Persona label or `all`.
    pub persona: String,
    /// Country label or `all`.
    pub country: String,
    pub search: String,
    /// Column id such as `last_name` or `connection_date`.
    pub sort_key: Option<String>,
    pub descending: bool,
}

/// Display-ready contact row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRow {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub linkedin_profile_url: String,
    pub location: String,
    pub company_name: String,
    pub company_website: String,
    pub industry: String,
    pub current_role: String,
    pub email_address: Option<String>,
    pub buyer_persona_type: String,
    pub connection_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionsResponse {
    pub rows: Vec<ContactRow>,
    pub total_contacts: u32,
    pub available_personas: Vec<String>,
    pub available_countries: Vec<String>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceItem {
    pub company_name: String,
    pub position: String,
    pub start_date: String,
    /// Absent while ongoing.
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperiencesResponse {
    pub items: Vec<ExperienceItem>,
    pub message: String,
}

/// Sidebar entries in display order.
#[flutter_rust_bridge::frb(sync)]
pub fn navigation_items() -> Vec<NavEntry> {
    ActiveTab::navigation()
        .into_iter()
        .map(|item| NavEntry {
            id: item.tab.as_str().to_string(),
            label: item.label.to_string(),
            description: item.description.to_string(),
        })
        .collect()
}

/// Headline statistics plus a greeting for the caller's local `hour`.
///
/// # FFI contract
/// - Sync call over in-memory data.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn dashboard_summary(hour: u32) -> SummaryResponse {
    let greeting = greeting_for_hour(hour).to_string();
    let store = match resolve_store() {
        Ok(store) => store,
        Err(err) => {
            return SummaryResponse {
                greeting,
                total_connections: 0,
                countries: 0,
                personas: 0,
                latest_month_connections: 0,
                latest_connection: None,
                message: format!("dashboard_summary failed: {err}"),
            };
        }
    };

    let mut controller = DashboardController::new(store);
    let summary = match controller.set_active_tab(ActiveTab::Dashboard) {
        ViewSnapshot::Dashboard(view) => view.summary,
        _ => DashboardSummary::from_contacts(&[]),
    };

    SummaryResponse {
        greeting,
        total_connections: to_u32(summary.total_connections),
        countries: to_u32(summary.countries),
        personas: to_u32(summary.personas),
        latest_month_connections: to_u32(summary.latest_month_connections),
        latest_connection: summary.latest_connection.map(|date| date.to_string()),
        message: "ok".to_string(),
    }
}

/// Country or persona distribution.
///
/// Input semantics:
/// - `dimension`: `country|persona`.
/// - `chart_type`: `pie|bar`.
#[flutter_rust_bridge::frb(sync)]
pub fn distribution_view(dimension: String, chart_type: String) -> DistributionResponse {
    let failure = |message: String| DistributionResponse {
        title: String::new(),
        chart_type: chart_type.trim().to_string(),
        entries: Vec::new(),
        total: 0,
        top_label: None,
        top_count: 0,
        message,
    };

    let Some(parsed_dimension) = CategoryDimension::parse(&dimension) else {
        return failure(format!("distribution_view failed: unknown dimension `{dimension}`"));
    };
    let Some(parsed_chart) = ChartType::parse(&chart_type) else {
        return failure(format!("distribution_view failed: unknown chart type `{chart_type}`"));
    };
    let store = match resolve_store() {
        Ok(store) => store,
        Err(err) => return failure(format!("distribution_view failed: {err}")),
    };

    let mut controller = DashboardController::new(store);
    controller.set_active_tab(ActiveTab::Analytics);
    controller.set_chart_type(parsed_chart);
    let ViewSnapshot::Analytics(view) = controller.set_dimension(parsed_dimension) else {
        return failure("distribution_view failed: unexpected snapshot".to_string());
    };

    let message = format!("{} categories.", view.category_count());
    DistributionResponse {
        title: view.title.to_string(),
        chart_type: view.chart_type.as_str().to_string(),
        total: to_u32(view.total),
        top_label: view.top_category.as_ref().map(|top| top.label.clone()),
        top_count: view.top_category.as_ref().map_or(0, |top| to_u32(top.count)),
        entries: view
            .entries
            .into_iter()
            .map(|entry| CategoryItem {
                label: entry.label,
                count: to_u32(entry.count),
                percentage: entry.percentage,
            })
            .collect(),
        message,
    }
}

/// Monthly connection velocity.
///
/// Input semantics:
/// - `year`: `None` selects the latest year in the data.
/// - `persona`: persona label or `all`; blank means `all`.
#[flutter_rust_bridge::frb(sync)]
pub fn velocity_view(year: Option<i32>, persona: String) -> VelocityResponse {
    let failure = |year: i32, message: String| VelocityResponse {
        year,
        months: Vec::new(),
        total: 0,
        average_per_month: 0.0,
        peak_month: String::new(),
        peak_count: 0,
        active_months: 0,
        available_years: Vec::new(),
        available_personas: Vec::new(),
        message,
    };

    let store = match resolve_store() {
        Ok(store) => store,
        Err(err) => {
            return failure(
                year.unwrap_or_default(),
                format!("velocity_view failed: {err}"),
            )
        }
    };

    let mut controller = DashboardController::new(store);
    controller.set_active_tab(ActiveTab::Velocity);
    let requested_year = year.unwrap_or(controller.state().selected_year);
    let applied = controller
        .set_year(requested_year)
        .and_then(|_| controller.set_persona_filter(filter_selection(&persona)));

    let view = match applied {
        Ok(ViewSnapshot::Velocity(view)) => view,
        Ok(_) => {
            return failure(
                requested_year,
                "velocity_view failed: unexpected snapshot".to_string(),
            )
        }
        Err(err) => return failure(requested_year, format!("velocity_view failed: {err}")),
    };

    VelocityResponse {
        year: view.year,
        months: view
            .months
            .iter()
            .map(|month| MonthItem {
                month: month.month.to_string(),
                count: to_u32(month.count),
            })
            .collect(),
        total: to_u32(view.stats.total),
        average_per_month: view.stats.average_per_month,
        peak_month: view.stats.peak_month.month.to_string(),
        peak_count: to_u32(view.stats.peak_month.count),
        active_months: to_u32(view.stats.active_months),
        available_years: view.available_years,
        available_personas: view.available_personas,
        message: format!("{} connection(s).", view.stats.total),
    }
}

/// Filtered, searched and sorted contact table.
///
/// # FFI contract
/// - Blank persona/country values mean `all`.
/// - Unknown filter values or sort keys return an empty row set with message.
#[flutter_rust_bridge::frb(sync)]
pub fn connections_view(request: ConnectionsRequest) -> ConnectionsResponse {
    let failure = |message: String| ConnectionsResponse {
        rows: Vec::new(),
        total_contacts: 0,
        available_personas: Vec::new(),
        available_countries: Vec::new(),
        message,
    };

    let sort = match request.sort_key.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => match SortKey::parse(raw) {
            Some(key) if request.descending => Some(SortSpec::desc(key)),
            Some(key) => Some(SortSpec::asc(key)),
            None => return failure(format!("connections_view failed: unknown sort key `{raw}`")),
        },
    };
    let store = match resolve_store() {
        Ok(store) => store,
        Err(err) => return failure(format!("connections_view failed: {err}")),
    };

    let mut controller = DashboardController::new(store);
    controller.set_active_tab(ActiveTab::Connections);
    controller.set_search_text(request.search.as_str());
    controller.set_sort(sort);
    let applied = controller
        .set_persona_filter(filter_selection(&request.persona))
        .and_then(|_| controller.set_country_filter(filter_selection(&request.country)));

    let table = match applied {
        Ok(ViewSnapshot::Connections(table)) => table,
        Ok(_) => return failure("connections_view failed: unexpected snapshot".to_string()),
        Err(err) => return failure(filter_failure_message(&err)),
    };

    let message = if table.rows.is_empty() {
        "No connections found.".to_string()
    } else {
        format!("Showing {} of {} connection(s).", table.rows.len(), table.total_contacts)
    };
    ConnectionsResponse {
        rows: table.rows.iter().map(to_contact_row).collect(),
        total_contacts: to_u32(table.total_contacts),
        available_personas: table.available_personas,
        available_countries: table.available_countries,
        message,
    }
}

/// Work history of one contact.
#[flutter_rust_bridge::frb(sync)]
pub fn contact_experiences(contact_id: u32) -> ExperiencesResponse {
    let store = match resolve_store() {
        Ok(store) => store,
        Err(err) => {
            return ExperiencesResponse {
                items: Vec::new(),
                message: format!("contact_experiences failed: {err}"),
            };
        }
    };

    let controller = DashboardController::new(store);
    let items = controller
        .experiences_for(contact_id)
        .into_iter()
        .map(|experience| ExperienceItem {
            company_name: experience.company_name.clone(),
            position: experience.position.clone(),
            start_date: experience.start_date.to_string(),
            end_date: experience.end_date.map(|date| date.to_string()),
        })
        .collect::<Vec<_>>();
    let message = if items.is_empty() {
        "No experience on record.".to_string()
    } else {
        format!("Found {} position(s).", items.len())
    };
    ExperiencesResponse { items, message }
}

fn resolve_store() -> Result<&'static InMemoryContactRepository, String> {
    STORE.get_or_try_init(|| {
        DashboardConfig::from_env()
            .load_repository()
            .map_err(|err| {
                warn!("event=store_init module=ffi status=error error={err}");
                err.to_string()
            })
    })
}

fn filter_selection(raw: &str) -> Selection {
    match raw.trim() {
        "" => Selection::All,
        value => Selection::from(value),
    }
}

fn filter_failure_message(err: &ViewStateError) -> String {
    format!("connections_view failed: {err}")
}

fn to_contact_row(contact: &Contact) -> ContactRow {
    ContactRow {
        id: contact.id,
        first_name: contact.first_name.clone(),
        last_name: contact.last_name.clone(),
        linkedin_profile_url: contact.linkedin_profile_url.clone(),
        location: contact.location_label(),
        company_name: contact.employer.name.clone(),
        company_website: contact.employer.website.clone(),
        industry: contact.employer.industry.clone(),
        current_role: contact.current_role.clone(),
        email_address: contact.email_address.clone(),
        buyer_persona_type: contact.buyer_persona_type.clone(),
        connection_date: contact.connection_date.to_string(),
    }
}

fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
