use super::*;

#[test]
fn allocation_is_sequential_and_non_zero() {
    let mut reg = AnchorRegistry::new();
    assert!(reg.is_empty());
    let year = reg.allocate(AnchorTarget::Year).unwrap();
    let jan = reg.allocate(AnchorTarget::Month(1)).unwrap();
    let feb = reg.allocate(AnchorTarget::Month(2)).unwrap();
    assert_eq!((year.get(), jan.get(), feb.get()), (1, 2, 3));
    assert_eq!(year.dest_name(), "a1");
}

#[test]
fn allocation_is_idempotent_per_target() {
    let mut reg = AnchorRegistry::new();
    let day = DateKey::new(2025, 3, 31).unwrap();
    let first = reg.allocate(AnchorTarget::Day(day)).unwrap();
    reg.allocate(AnchorTarget::Year).unwrap();
    let again = reg.allocate(AnchorTarget::Day(day)).unwrap();
    assert_eq!(first, again);
    assert_eq!(reg.len(), 2);
}

#[test]
fn frozen_links_answer_lookups() {
    let mut reg = AnchorRegistry::new();
    let year = reg.allocate(AnchorTarget::Year).unwrap();
    let week = reg
        .allocate(AnchorTarget::Week { month: 4, index: 2 })
        .unwrap();
    let hub = reg.allocate(AnchorTarget::CollectionsHub).unwrap();
    let ideas = reg
        .allocate(AnchorTarget::Collection(Collection::Ideas))
        .unwrap();
    let links = reg.freeze();

    assert_eq!(links.year(), Some(year));
    assert_eq!(links.week(4, 2), Some(week));
    assert_eq!(links.week(4, 3), None);
    assert_eq!(links.collections_hub(), Some(hub));
    assert_eq!(links.collection(Collection::Ideas), Some(ideas));
    assert_eq!(links.collection(Collection::Ooo), None);
    assert_eq!(links.month(1), None);
    assert_eq!(
        links.allocation_order(),
        &[
            AnchorTarget::Year,
            AnchorTarget::Week { month: 4, index: 2 },
            AnchorTarget::CollectionsHub,
            AnchorTarget::Collection(Collection::Ideas),
        ]
    );
    assert_eq!(
        links.count_where(|t| matches!(t, AnchorTarget::Collection(_))),
        1
    );
}

#[test]
fn require_reports_missing_target() {
    let links = AnchorRegistry::new().freeze();
    let err = links.require(AnchorTarget::Month(7)).unwrap_err();
    assert!(matches!(err, BujoError::Anchor(_)));
    assert!(err.to_string().contains("month 7"));
}

#[test]
fn collection_labels_are_fixed() {
    let labels: Vec<&str> = Collection::ALL.iter().map(|c| c.label()).collect();
    assert_eq!(labels, vec!["Writing", "Ideas", "OOO"]);
}
