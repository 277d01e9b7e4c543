use linkboard_core::{
    monthly_velocity, ContactRepository, InMemoryContactRepository, Selection, VelocityStats,
};

fn counts(months: &[linkboard_core::MonthCount; 12]) -> Vec<usize> {
    months.iter().map(|m| m.count).collect()
}

#[test]
fn fixture_velocity_for_2025() {
    let repo = InMemoryContactRepository::builtin();
    let months = monthly_velocity(repo.list_contacts(), 2025, &Selection::All);

    assert_eq!(counts(&months), vec![3, 2, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0]);
    let indices: Vec<u8> = months.iter().map(|m| m.month_index).collect();
    assert_eq!(indices, (0..12).collect::<Vec<u8>>());

    let stats = VelocityStats::from_months(&months);
    assert_eq!(stats.total, 8);
    assert_eq!(stats.average_per_month, 0.7);
    assert_eq!(stats.peak_month.month, "Jan");
    assert_eq!(stats.peak_month.count, 3);
    assert_eq!(stats.active_months, 4);
}

#[test]
fn persona_filter_restricts_counts() {
    let repo = InMemoryContactRepository::builtin();
    let months = monthly_velocity(
        repo.list_contacts(),
        2025,
        &Selection::only("Tech Practitioner"),
    );

    assert_eq!(counts(&months), vec![0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0]);
    let stats = VelocityStats::from_months(&months);
    assert_eq!(stats.total, 2);
    assert_eq!(stats.average_per_month, 0.2);
    assert_eq!(stats.peak_month.month, "Mar");
}

#[test]
fn year_without_connections_is_zero_filled() {
    let repo = InMemoryContactRepository::builtin();
    let months = monthly_velocity(repo.list_contacts(), 2024, &Selection::All);

    assert_eq!(months.len(), 12);
    assert!(months.iter().all(|m| m.count == 0));
    let stats = VelocityStats::from_months(&months);
    assert_eq!(stats.average_per_month, 0.0);
    assert_eq!(stats.peak_month.month_index, 0);
    assert_eq!(stats.active_months, 0);
}

#[test]
fn unknown_persona_counts_nothing() {
    let repo = InMemoryContactRepository::builtin();
    let months = monthly_velocity(repo.list_contacts(), 2025, &Selection::only("Investor"));
    assert_eq!(counts(&months).iter().sum::<usize>(), 0);
}
