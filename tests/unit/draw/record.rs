use super::*;

fn handle(n: u32) -> AnchorHandle {
    AnchorHandle::from_index(n).unwrap()
}

#[test]
fn drawing_before_a_page_is_an_error() {
    let mut s = RecordingSurface::new(Size::new(100.0, 100.0));
    assert!(matches!(
        s.stroke_rect(Rect::new(0.0, 0.0, 1.0, 1.0)),
        Err(BujoError::Draw(_))
    ));
    assert!(s.bind_anchor(handle(1)).is_err());
}

#[test]
fn records_text_with_current_font_and_color() {
    let mut s = RecordingSurface::new(Size::new(100.0, 100.0));
    s.begin_page().unwrap();
    s.set_font(FontStyle::Bold, 24.0);
    s.set_text_color(Rgb8::MUTED);
    s.draw_text(Rect::new(0.0, 0.0, 100.0, 24.0), "Title", Align::Center)
        .unwrap();

    let t = &s.pages()[0].texts[0];
    assert_eq!(t.text, "Title");
    assert_eq!(t.style, FontStyle::Bold);
    assert_eq!(t.size, 24.0);
    assert_eq!(t.color, Rgb8::MUTED);
    assert_eq!(s.pages()[0].title(), Some("Title"));
}

#[test]
fn binding_twice_is_rejected() {
    let mut s = RecordingSurface::new(Size::new(100.0, 100.0));
    s.begin_page().unwrap();
    s.bind_anchor(handle(1)).unwrap();
    s.begin_page().unwrap();
    let err = s.bind_anchor(handle(1)).unwrap_err();
    assert!(matches!(err, BujoError::Anchor(_)));
    assert_eq!(s.page_index_of(handle(1)), Some(0));
}

#[test]
fn forward_links_resolve_once_bound() {
    let mut s = RecordingSurface::new(Size::new(100.0, 100.0));
    s.begin_page().unwrap();
    s.bind_anchor(handle(1)).unwrap();
    s.link(Rect::new(0.0, 0.0, 10.0, 10.0), handle(2)).unwrap();
    assert_eq!(s.dangling_links(), vec![handle(2)]);

    s.begin_page().unwrap();
    s.bind_anchor(handle(2)).unwrap();
    assert!(s.dangling_links().is_empty());
    assert_eq!(s.page_of(handle(2)).unwrap().anchors, vec![handle(2)]);
    assert_eq!(s.pages()[0].link_at(Point::new(0.0, 0.0)), Some(handle(2)));
}
