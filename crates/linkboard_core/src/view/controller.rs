//! View state controller.
//!
//! # Responsibility
//! - Own the screen's `ViewState` and the injected repository.
//! - Recompute the active tab's snapshot synchronously after every mutation.
//!
//! # Invariants
//! - Every setter returns a snapshot computed from the updated state.
//! - Rejected updates leave the state untouched.
//! - Filter values must be present in the repository (or be `all`).

use super::snapshot::{build_snapshot, ViewSnapshot};
use super::state::{ActiveTab, ChartType, SortDirection, SortKey, SortSpec, ViewState};
use crate::aggregate::category::CategoryDimension;
use crate::aggregate::summary::{available_countries, available_personas, available_years};
use crate::aggregate::Selection;
use crate::model::contact::ContactId;
use crate::model::experience::Experience;
use crate::repo::contact_repo::ContactRepository;
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// Rejected view-state update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewStateError {
    /// No contact connected during this year.
    UnknownYear(i32),
    UnknownPersona(String),
    UnknownCountry(String),
}

impl Display for ViewStateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownYear(year) => write!(f, "no connections in year {year}"),
            Self::UnknownPersona(value) => write!(f, "unknown persona: `{value}`"),
            Self::UnknownCountry(value) => write!(f, "unknown country: `{value}`"),
        }
    }
}

impl Error for ViewStateError {}

pub type ViewResult<T> = Result<T, ViewStateError>;

/// Dashboard screen controller over a read-only repository.
pub struct DashboardController<R: ContactRepository> {
    repo: R,
    state: ViewState,
}

impl<R: ContactRepository> DashboardController<R> {
    /// Creates a controller with default state for the repository contents.
    pub fn new(repo: R) -> Self {
        let state = ViewState::for_contacts(repo.list_contacts());
        Self { repo, state }
    }

    /// Creates a controller from a previously captured state.
    ///
    /// # Errors
    /// - Returns [`ViewStateError`] when a filter value is not in the data.
    pub fn with_state(repo: R, state: ViewState) -> ViewResult<Self> {
        let controller = Self {
            repo,
            state: ViewState::with_year(state.selected_year),
        };
        controller.ensure_year(state.selected_year)?;
        controller.ensure_persona(&state.persona_filter)?;
        controller.ensure_country(&state.country_filter)?;
        Ok(Self { state, ..controller })
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Recomputes the active tab from the current state.
    pub fn snapshot(&self) -> ViewSnapshot {
        let started_at = Instant::now();
        let snapshot = build_snapshot(&self.repo, &self.state);
        debug!(
            "event=view_recompute module=view status=ok tab={} items={} duration_us={}",
            snapshot.tab().as_str(),
            snapshot.item_count(),
            started_at.elapsed().as_micros()
        );
        snapshot
    }

    pub fn set_active_tab(&mut self, tab: ActiveTab) -> ViewSnapshot {
        self.state.active_tab = tab;
        self.snapshot()
    }

    pub fn set_chart_type(&mut self, chart_type: ChartType) -> ViewSnapshot {
        self.state.chart_type = chart_type;
        self.snapshot()
    }

    pub fn set_dimension(&mut self, dimension: CategoryDimension) -> ViewSnapshot {
        self.state.dimension = dimension;
        self.snapshot()
    }

    /// Selects the velocity year.
    ///
    /// # Errors
    /// - [`ViewStateError::UnknownYear`] when no contact connected that year.
    pub fn set_year(&mut self, year: i32) -> ViewResult<ViewSnapshot> {
        self.ensure_year(year)?;
        self.state.selected_year = year;
        Ok(self.snapshot())
    }

    /// Sets the persona filter shared by the table and velocity chart.
    ///
    /// # Errors
    /// - [`ViewStateError::UnknownPersona`] when the persona is not in the data.
    pub fn set_persona_filter(&mut self, persona: Selection) -> ViewResult<ViewSnapshot> {
        self.ensure_persona(&persona)?;
        self.state.persona_filter = persona;
        Ok(self.snapshot())
    }

    /// Sets the table country filter.
    ///
    /// # Errors
    /// - [`ViewStateError::UnknownCountry`] when the country is not in the data.
    pub fn set_country_filter(&mut self, country: Selection) -> ViewResult<ViewSnapshot> {
        self.ensure_country(&country)?;
        self.state.country_filter = country;
        Ok(self.snapshot())
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) -> ViewSnapshot {
        self.state.search_text = text.into();
        self.snapshot()
    }

    pub fn set_sort(&mut self, sort: Option<SortSpec>) -> ViewSnapshot {
        self.state.sort = sort;
        self.snapshot()
    }

    /// Column-header click: ascending first, then flips to descending.
    pub fn toggle_sort(&mut self, key: SortKey) -> ViewSnapshot {
        let next = match self.state.sort {
            Some(SortSpec {
                key: current,
                direction: SortDirection::Asc,
            }) if current == key => SortSpec::desc(key),
            _ => SortSpec::asc(key),
        };
        self.set_sort(Some(next))
    }

    pub fn clear_sort(&mut self) -> ViewSnapshot {
        self.set_sort(None)
    }

    pub fn set_sidebar_collapsed(&mut self, collapsed: bool) -> ViewSnapshot {
        self.state.sidebar_collapsed = collapsed;
        self.snapshot()
    }

    pub fn toggle_sidebar(&mut self) -> ViewSnapshot {
        let collapsed = !self.state.sidebar_collapsed;
        self.set_sidebar_collapsed(collapsed)
    }

    /// Work history of one contact, insertion order.
    pub fn experiences_for(&self, contact_id: ContactId) -> Vec<&Experience> {
        self.repo.list_experiences(contact_id)
    }

    fn ensure_year(&self, year: i32) -> ViewResult<()> {
        let contacts = self.repo.list_contacts();
        // An empty store has no years to pick from; keep its fallback year.
        if contacts.is_empty() || available_years(contacts).contains(&year) {
            return Ok(());
        }
        Err(ViewStateError::UnknownYear(year))
    }

    fn ensure_persona(&self, persona: &Selection) -> ViewResult<()> {
        match persona {
            Selection::All => Ok(()),
            Selection::Only(value) => {
                if available_personas(self.repo.list_contacts()).contains(value) {
                    Ok(())
                } else {
                    Err(ViewStateError::UnknownPersona(value.clone()))
                }
            }
        }
    }

    fn ensure_country(&self, country: &Selection) -> ViewResult<()> {
        match country {
            Selection::All => Ok(()),
            Selection::Only(value) => {
                if available_countries(self.repo.list_contacts()).contains(value) {
                    Ok(())
                } else {
                    Err(ViewStateError::UnknownCountry(value.clone()))
                }
            }
        }
    }
}
