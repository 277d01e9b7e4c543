use linkboard_core::{
    group_by_category, group_by_dimension, sorted_by_count, top_category, CategoryDimension,
    ContactRepository, InMemoryContactRepository,
};

fn labels_and_counts(entries: &[linkboard_core::CategoryCount]) -> Vec<(&str, usize, f64)> {
    entries
        .iter()
        .map(|e| (e.label.as_str(), e.count, e.percentage))
        .collect()
}

#[test]
fn country_breakdown_of_fixture() {
    let repo = InMemoryContactRepository::builtin();
    let entries = group_by_category(repo.list_contacts(), |c| c.location.country.as_str());

    assert_eq!(
        labels_and_counts(&entries),
        vec![
            ("United States", 5, 62.5),
            ("Canada", 1, 12.5),
            ("United Kingdom", 1, 12.5),
            ("Spain", 1, 12.5),
        ]
    );
    assert_eq!(entries.iter().map(|e| e.count).sum::<usize>(), 8);
}

#[test]
fn persona_breakdown_keeps_first_seen_order() {
    let repo = InMemoryContactRepository::builtin();
    let entries = group_by_dimension(repo.list_contacts(), CategoryDimension::Persona);

    assert_eq!(
        labels_and_counts(&entries),
        vec![
            ("Executive", 2, 25.0),
            ("Technical Decision Maker", 2, 25.0),
            ("Tech Practitioner", 2, 25.0),
            ("Sales Leader", 1, 12.5),
            ("Budget Owner", 1, 12.5),
        ]
    );

    let top = top_category(&entries).unwrap();
    assert_eq!(top.label, "Executive");
    assert_eq!(sorted_by_count(&entries)[3].label, "Sales Leader");
}

#[test]
fn counts_and_percentages_hold_for_every_prefix() {
    let repo = InMemoryContactRepository::builtin();
    let contacts = repo.list_contacts();

    for len in 1..=contacts.len() {
        let subset = &contacts[..len];
        for dimension in [CategoryDimension::Country, CategoryDimension::Persona] {
            let entries = group_by_dimension(subset, dimension);
            let count_sum: usize = entries.iter().map(|e| e.count).sum();
            assert_eq!(count_sum, len);

            let pct_sum: f64 = entries.iter().map(|e| e.percentage).sum();
            let tolerance = 0.1 * entries.len() as f64;
            assert!(
                (pct_sum - 100.0).abs() <= tolerance,
                "percentages sum to {pct_sum} for {len} contacts"
            );
        }
    }
}

#[test]
fn empty_input_yields_no_entries() {
    let entries = group_by_dimension(&[], CategoryDimension::Country);
    assert!(entries.is_empty());
    assert!(top_category(&entries).is_none());
}
