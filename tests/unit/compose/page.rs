use super::*;
use crate::draw::record::RecordingSurface;
use crate::foundation::core::{Point, Size};

fn handle(n: u32) -> AnchorHandle {
    AnchorHandle::from_index(n).unwrap()
}

#[test]
fn begin_binds_the_page_anchor_first() {
    let layout = Layout::default();
    let mut s = RecordingSurface::new(layout.page_size());
    {
        let page = PageComposer::begin(&mut s, &layout, handle(5)).unwrap();
        assert_eq!(page.cursor(), layout.margin);
    }
    assert_eq!(s.pages().len(), 1);
    assert_eq!(s.pages()[0].anchors, vec![handle(5)]);
    assert!(s.pages()[0].texts.is_empty());
}

#[test]
fn nav_places_back_left_and_home_right() {
    let layout = Layout::default();
    let mut s = RecordingSurface::new(layout.page_size());
    {
        let mut page = PageComposer::begin(&mut s, &layout, handle(3)).unwrap();
        page.nav(Some(handle(1)), Some(handle(2))).unwrap();
    }
    let p = &s.pages()[0];
    let top = 36.0 * 0.6;
    assert_eq!(p.link_at(Point::new(36.0, top)), Some(handle(2)));
    assert_eq!(p.link_at(Point::new(612.0 - 36.0 - 60.0, top)), Some(handle(1)));
    assert!(p.has_text(BACK_LABEL));
    assert!(p.has_text(HOME_LABEL));
}

#[test]
fn nav_omits_missing_targets() {
    let layout = Layout::default();
    let mut s = RecordingSurface::new(layout.page_size());
    {
        let mut page = PageComposer::begin(&mut s, &layout, handle(3)).unwrap();
        page.nav(Some(handle(1)), None).unwrap();
    }
    let p = &s.pages()[0];
    assert_eq!(p.links.len(), 1);
    assert!(!p.has_text(BACK_LABEL));
}

#[test]
fn grid_links_skip_absent_anchors() {
    let layout = Layout::default();
    let mut s = RecordingSurface::new(layout.page_size());
    {
        let mut page = PageComposer::begin(&mut s, &layout, handle(1)).unwrap();
        let grid = page
            .grid_links(
                GridSpec::default(),
                &["A", "B", "C", "D"],
                &[Some(handle(2)), None, Some(handle(4))],
            )
            .unwrap();
        assert_eq!(grid.rows, 2);
        assert!(page.cursor() > grid.bottom);
    }
    let p = &s.pages()[0];
    assert_eq!(p.rects.len(), 4);
    let targets: Vec<AnchorHandle> = p.links.iter().map(|l| l.target).collect();
    assert_eq!(targets, vec![handle(2), handle(4)]);
}

#[test]
fn dot_grid_stays_inside_margins_and_below_cursor() {
    let layout = Layout {
        page_size: crate::config::PageSizeClass::CompactDevice,
        ..Layout::default()
    };
    let mut s = RecordingSurface::new(layout.page_size());
    let count;
    let cursor;
    {
        let mut page = PageComposer::begin(&mut s, &layout, handle(1)).unwrap();
        page.title("Ideas").unwrap();
        cursor = page.cursor();
        count = page.dot_grid().unwrap();
    }
    let size: Size = layout.page_size();
    let dots = &s.pages()[0].dots;
    assert_eq!(dots.len(), count);
    assert!(count > 0);
    for d in dots {
        assert!(d.x > 36.0 && d.x < size.width - 36.0);
        assert!(d.y > cursor && d.y < size.height - 36.0);
    }
}
