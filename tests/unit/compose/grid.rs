use super::*;

#[test]
fn twelve_items_in_three_columns_fill_four_rows() {
    let g = layout_grid(GridSpec::default(), 12, 36.0, 100.0, 540.0);
    assert_eq!(g.rows, 4);
    assert_eq!(g.cells.len(), 12);
    // Last row is full: three cells share its top edge.
    let last_row: Vec<&Rect> = g.cells.iter().filter(|c| c.y0 == g.cells[11].y0).collect();
    assert_eq!(last_row.len(), 3);
    assert_eq!(g.bottom, 100.0 + 4.0 * 72.0 + 3.0 * 8.0);
}

#[test]
fn three_items_in_three_columns_fill_one_row() {
    let g = layout_grid(GridSpec::default(), 3, 36.0, 50.0, 540.0);
    assert_eq!(g.rows, 1);
    assert!(g.cells.iter().all(|c| c.y0 == 50.0));
    assert_eq!(g.bottom, 122.0);
}

#[test]
fn column_width_accounts_for_gaps() {
    let g = layout_grid(GridSpec::default(), 3, 36.0, 0.0, 540.0);
    let w = (540.0 - 2.0 * 8.0) / 3.0;
    for (i, c) in g.cells.iter().enumerate() {
        assert!((c.width() - w).abs() < 1e-9);
        assert!((c.x0 - (36.0 + i as f64 * (w + 8.0))).abs() < 1e-9);
    }
    assert!((g.cells[2].x1 - 576.0).abs() < 1e-9);
}

#[test]
fn partial_last_row_wraps() {
    let g = layout_grid(GridSpec::default(), 4, 0.0, 0.0, 300.0);
    assert_eq!(g.rows, 2);
    assert_eq!(g.cells[3].x0, 0.0);
    assert_eq!(g.cells[3].y0, 80.0);
}

#[test]
fn empty_grid_has_no_rows() {
    let g = layout_grid(GridSpec::default(), 0, 0.0, 10.0, 300.0);
    assert_eq!(g.rows, 0);
    assert_eq!(g.bottom, 10.0);
}

#[test]
fn dot_grid_excludes_edges() {
    let pts = dot_grid_points(Rect::new(0.0, 0.0, 100.0, 50.0), 10.0);
    // x: 10..=90 (9 columns), y: 10..=40 (4 rows)
    assert_eq!(pts.len(), 36);
    assert_eq!(pts[0], Point::new(10.0, 10.0));
    assert_eq!(*pts.last().unwrap(), Point::new(90.0, 40.0));
}

#[test]
fn dot_grid_with_degenerate_spacing_is_empty() {
    let area = Rect::new(0.0, 0.0, 100.0, 100.0);
    assert!(dot_grid_points(area, 0.0).is_empty());
    assert!(dot_grid_points(area, -5.0).is_empty());
    assert!(dot_grid_points(area, f64::NAN).is_empty());
}

#[test]
fn dot_grid_stops_short_of_a_fractional_edge() {
    // 105 / 10 leaves markers at 10..=100 across, 25 / 10 leaves 10 and 20 down.
    let pts = dot_grid_points(Rect::new(0.0, 0.0, 105.0, 25.0), 10.0);
    assert_eq!(pts.len(), 20);
    assert_eq!(*pts.last().unwrap(), Point::new(100.0, 20.0));
}

#[test]
fn dot_grid_on_a_page_stays_bounded() {
    // Letter content area at the minimum spacing.
    let area = Rect::new(36.0, 36.0, 576.0, 756.0);
    let pts = dot_grid_points(area, crate::config::MIN_GRID_SPACING);
    assert_eq!(pts.len(), 134 * 179);
    assert!(pts.iter().all(|p| p.x < 576.0 && p.y < 756.0));
}
