use linkboard_core::{
    ActiveTab, CategoryDimension, ChartType, DashboardController, InMemoryContactRepository,
    Selection, SortKey, ViewSnapshot, ViewState, ViewStateError,
};

fn controller() -> DashboardController<InMemoryContactRepository> {
    DashboardController::new(InMemoryContactRepository::builtin())
}

#[test]
fn default_state_targets_latest_year_and_dashboard_tab() {
    let controller = controller();
    let state = controller.state();

    assert_eq!(state.active_tab, ActiveTab::Dashboard);
    assert_eq!(state.chart_type, ChartType::Pie);
    assert_eq!(state.dimension, CategoryDimension::Country);
    assert_eq!(state.selected_year, 2025);
    assert!(state.persona_filter.is_all());
    assert!(state.country_filter.is_all());
    assert!(state.search_text.is_empty());
    assert_eq!(state.sort, None);
    assert!(!state.sidebar_collapsed);
}

#[test]
fn dashboard_snapshot_combines_summary_and_both_charts() {
    let ViewSnapshot::Dashboard(view) = controller().snapshot() else {
        panic!("dashboard tab should produce a dashboard snapshot");
    };

    assert_eq!(view.summary.total_connections, 8);
    assert_eq!(view.summary.countries, 4);
    assert_eq!(view.summary.personas, 5);
    assert_eq!(view.summary.latest_month_connections, 1);
    assert_eq!(
        view.summary.latest_connection.map(|d| d.to_string()),
        Some("2025-04-12".to_string())
    );
    assert_eq!(view.distribution.title, "Country-wise Distribution");
    assert_eq!(view.distribution.category_count(), 4);
    assert_eq!(view.velocity.stats.total, 8);
}

#[test]
fn table_filters_recompute_on_every_setter() {
    let mut controller = controller();

    let ViewSnapshot::Connections(table) = controller.set_active_tab(ActiveTab::Connections) else {
        panic!("connections tab should produce a table");
    };
    assert_eq!(table.rows.len(), 8);
    assert_eq!(table.total_contacts, 8);
    assert_eq!(
        table.available_countries,
        vec!["United States", "Canada", "United Kingdom", "Spain"]
    );

    let ViewSnapshot::Connections(table) =
        controller.set_country_filter(Selection::only("Canada")).unwrap()
    else {
        panic!("table expected");
    };
    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.rows[0].full_name(), "David Kim");

    let ViewSnapshot::Connections(table) = controller.set_search_text("Thompson") else {
        panic!("table expected");
    };
    assert!(table.rows.is_empty());

    controller.set_country_filter(Selection::All).unwrap();
    let ViewSnapshot::Connections(table) = controller.snapshot() else {
        panic!("table expected");
    };
    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.rows[0].full_name(), "Lisa Thompson");
}

#[test]
fn toggle_sort_drives_table_order() {
    let mut controller = controller();
    controller.set_active_tab(ActiveTab::Connections);

    let ViewSnapshot::Connections(asc) = controller.toggle_sort(SortKey::ConnectionDate) else {
        panic!("table expected");
    };
    assert_eq!(asc.rows[0].full_name(), "Jennifer Brown");

    let ViewSnapshot::Connections(desc) = controller.toggle_sort(SortKey::ConnectionDate) else {
        panic!("table expected");
    };
    assert_eq!(desc.rows[0].full_name(), "David Kim");

    let ViewSnapshot::Connections(unsorted) = controller.clear_sort() else {
        panic!("table expected");
    };
    assert_eq!(unsorted.rows[0].full_name(), "Terrence McLean");
}

#[test]
fn analytics_tab_follows_dimension_and_chart_type() {
    let mut controller = controller();
    controller.set_active_tab(ActiveTab::Analytics);
    controller.set_chart_type(ChartType::Bar);

    let ViewSnapshot::Analytics(view) = controller.set_dimension(CategoryDimension::Persona) else {
        panic!("analytics tab should produce a distribution");
    };
    assert_eq!(view.chart_type, ChartType::Bar);
    assert_eq!(view.title, "Buyer Persona Distribution");
    assert_eq!(view.entries.len(), 5);
    assert_eq!(view.total, 8);
    assert_eq!(
        view.top_category.map(|top| (top.label, top.count)),
        Some(("Executive".to_string(), 2))
    );
}

#[test]
fn velocity_tab_applies_year_and_persona() {
    let mut controller = controller();
    controller.set_active_tab(ActiveTab::Velocity);

    let ViewSnapshot::Velocity(view) = controller
        .set_persona_filter(Selection::only("Executive"))
        .unwrap()
    else {
        panic!("velocity tab should produce velocity data");
    };
    assert_eq!(view.year, 2025);
    assert_eq!(view.available_years, vec![2025]);
    assert_eq!(view.months[0].count, 2);
    assert_eq!(view.stats.total, 2);
    assert_eq!(view.stats.peak_month.month, "Jan");
}

#[test]
fn unknown_values_are_rejected_without_side_effects() {
    let mut controller = controller();
    let before = controller.state().clone();

    assert_eq!(
        controller.set_year(1999).unwrap_err(),
        ViewStateError::UnknownYear(1999)
    );
    assert_eq!(
        controller
            .set_persona_filter(Selection::only("Investor"))
            .unwrap_err(),
        ViewStateError::UnknownPersona("Investor".to_string())
    );
    assert_eq!(controller.state(), &before);
}

#[test]
fn setting_same_value_twice_is_idempotent() {
    let mut controller = controller();
    controller.set_active_tab(ActiveTab::Connections);

    let first = controller.set_search_text("tech");
    let state_after_first = controller.state().clone();
    let second = controller.set_search_text("tech");

    assert_eq!(first, second);
    assert_eq!(controller.state(), &state_after_first);
}

#[test]
fn sidebar_toggle_flips_flag() {
    let mut controller = controller();
    controller.toggle_sidebar();
    assert!(controller.state().sidebar_collapsed);
    controller.toggle_sidebar();
    assert!(!controller.state().sidebar_collapsed);
    controller.set_sidebar_collapsed(true);
    assert!(controller.state().sidebar_collapsed);
}

#[test]
fn captured_state_restores_through_json() {
    let mut controller = controller();
    controller.set_active_tab(ActiveTab::Connections);
    controller.set_country_filter(Selection::only("Spain")).unwrap();
    controller.toggle_sort(SortKey::LastName);

    let json = serde_json::to_string(controller.state()).unwrap();
    let state: ViewState = serde_json::from_str(&json).unwrap();
    let restored =
        DashboardController::with_state(InMemoryContactRepository::builtin(), state).unwrap();

    assert_eq!(restored.state(), controller.state());
    assert_eq!(restored.snapshot(), controller.snapshot());
}

#[test]
fn captured_state_with_unknown_country_is_rejected() {
    let mut state = ViewState::with_year(2025);
    state.country_filter = Selection::only("Narnia");

    let err = DashboardController::with_state(InMemoryContactRepository::builtin(), state)
        .err()
        .expect("unknown country must be rejected");
    assert_eq!(err, ViewStateError::UnknownCountry("Narnia".to_string()));
}

#[test]
fn snapshot_serializes_with_tab_tag() {
    let mut controller = controller();
    let snapshot = controller.set_active_tab(ActiveTab::Velocity);

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["tab"], "velocity");
    assert_eq!(json["view"]["months"].as_array().map(|m| m.len()), Some(12));
    assert_eq!(json["view"]["persona"], "all");
}

#[test]
fn experiences_resolve_through_controller() {
    let controller = controller();
    let positions: Vec<_> = controller
        .experiences_for(4)
        .into_iter()
        .map(|e| e.position.as_str())
        .collect();
    assert_eq!(positions, vec!["Sales Manager"]);
}

#[test]
fn borrowed_repository_can_back_a_controller() {
    let repo = InMemoryContactRepository::builtin();
    let mut controller = DashboardController::new(&repo);
    let ViewSnapshot::Connections(table) = controller.set_active_tab(ActiveTab::Connections) else {
        panic!("table expected");
    };
    assert_eq!(table.rows.len(), 8);
}
