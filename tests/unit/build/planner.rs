use super::*;
use crate::config::Layout;
use crate::draw::record::RecordingSurface;

fn config(year: i32, full: bool) -> PlannerConfig {
    PlannerConfig::new(year, "unused.pdf", Layout::default().with_full(full)).unwrap()
}

fn record(cfg: &PlannerConfig) -> (Links, RecordingSurface, BuildStats) {
    let links = allocate_links(cfg).unwrap();
    let mut s = RecordingSurface::new(cfg.layout.page_size());
    let stats = render_planner(cfg, &links, &mut s).unwrap();
    (links, s, stats)
}

#[test]
fn compact_build_allocates_hubs_months_and_collections() {
    let links = allocate_links(&config(2024, false)).unwrap();
    // year + 12 months + hub + 3 collections
    assert_eq!(links.len(), 17);
    assert_eq!(links.count_where(|t| matches!(t, AnchorTarget::Week { .. })), 0);
    assert_eq!(links.count_where(|t| matches!(t, AnchorTarget::Day(_))), 0);
    assert_eq!(links.allocation_order()[0], AnchorTarget::Year);
}

#[test]
fn full_build_allocates_one_anchor_per_day() {
    let links = allocate_links(&config(2024, true)).unwrap();
    assert_eq!(links.count_where(|t| matches!(t, AnchorTarget::Day(_))), 366);
    let weeks: usize = (1..=12)
        .map(|m| weeks_of_month(2024, m).unwrap().len())
        .sum();
    assert_eq!(
        links.count_where(|t| matches!(t, AnchorTarget::Week { .. })),
        weeks
    );
}

#[test]
fn render_emits_pages_in_traversal_order() {
    let cfg = config(2024, false);
    let (links, s, stats) = record(&cfg);
    assert_eq!(stats.pages, 17);
    assert_eq!(s.pages().len(), stats.pages);
    let titles: Vec<&str> = s.pages().iter().filter_map(|p| p.title()).collect();
    assert_eq!(titles[0], "2024 Bullet Journal");
    assert_eq!(titles[1], "January 2024");
    assert_eq!(titles[12], "December 2024");
    assert_eq!(&titles[13..], ["Collections", "Writing", "Ideas", "OOO"]);
    assert_eq!(stats.anchors, links.len());
}

#[test]
fn full_render_binds_every_anchor_exactly_once() {
    let cfg = config(2025, true);
    let (links, s, stats) = record(&cfg);
    assert_eq!(stats.day_pages, 365);
    assert_eq!(stats.month_pages, 12);
    assert_eq!(stats.collection_pages, 3);
    assert_eq!(stats.hub_pages, 2);
    for target in links.allocation_order() {
        let handle = links.get(*target).unwrap();
        assert!(s.page_index_of(handle).is_some(), "{target} never bound");
    }
    assert!(s.dangling_links().is_empty());
}

#[test]
fn week_pages_follow_their_month_and_precede_their_days() {
    let cfg = config(2025, true);
    let (links, s, _) = record(&cfg);
    let month = s.page_index_of(links.month(3).unwrap()).unwrap();
    let week0 = s.page_index_of(links.week(3, 0).unwrap()).unwrap();
    let mar1 = links.day(DateKey::new(2025, 3, 1).unwrap()).unwrap();
    assert_eq!(week0, month + 1);
    assert!(s.page_index_of(mar1).unwrap() > week0);
}

#[test]
fn disabled_collections_render_no_collection_pages() {
    let mut cfg = config(2024, false);
    cfg.layout.show_collections = false;
    let (links, s, stats) = record(&cfg);
    assert_eq!(links.len(), 13);
    assert_eq!(stats.pages, 13);
    assert!(s.dangling_links().is_empty());
}

#[test]
fn allocation_is_deterministic() {
    let cfg = config(2026, true);
    let a = allocate_links(&cfg).unwrap();
    let b = allocate_links(&cfg).unwrap();
    assert_eq!(a.allocation_order(), b.allocation_order());
}

#[test]
fn invalid_config_is_rejected_before_rendering() {
    let mut cfg = config(2024, false);
    cfg.layout.grid_spacing = 0.0;
    let err = build_planner_bytes(&cfg).unwrap_err();
    assert!(matches!(err, crate::foundation::error::BujoError::Validation(_)));
}
