use crate::foundation::core::{Point, Rect};

/// Fixed-column grid of equally sized cells.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridSpec {
    /// Number of columns; rows wrap after this many cells.
    pub columns: usize,
    /// Gap between cells, both directions, in points.
    pub gap: f64,
    /// Row height in points.
    pub cell_height: f64,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            columns: 3,
            gap: 8.0,
            cell_height: 72.0,
        }
    }
}

/// Resolved grid geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct GridLayout {
    /// One rect per item, row-major.
    pub cells: Vec<Rect>,
    /// Number of rows used.
    pub rows: usize,
    /// Bottom edge of the last row (equals `top` for an empty grid).
    pub bottom: f64,
}

/// Lay out `count` cells starting at (`left`, `top`) across `width` points.
///
/// Column width is `(width - (columns - 1) * gap) / columns`.
pub fn layout_grid(spec: GridSpec, count: usize, left: f64, top: f64, width: f64) -> GridLayout {
    let cols = spec.columns.max(1);
    let cell_w = ((width - (cols - 1) as f64 * spec.gap) / cols as f64).max(0.0);
    let cells: Vec<Rect> = (0..count)
        .map(|idx| {
            let row = idx / cols;
            let col = idx % cols;
            let x = left + col as f64 * (cell_w + spec.gap);
            let y = top + row as f64 * (spec.cell_height + spec.gap);
            Rect::new(x, y, x + cell_w, y + spec.cell_height)
        })
        .collect();
    let rows = count.div_ceil(cols);
    let bottom = cells.last().map_or(top, |c| c.y1);
    GridLayout {
        cells,
        rows,
        bottom,
    }
}

/// Dot-grid marker positions inside `area`, row-major.
///
/// Markers sit at whole multiples of `spacing` from the area's top-left corner, excluding the
/// corner row/column itself and anything on or past the far edges. A non-positive spacing yields
/// no markers.
pub fn dot_grid_points(area: Rect, spacing: f64) -> Vec<Point> {
    if !(spacing.is_finite() && spacing > 0.0) {
        return Vec::new();
    }
    // Multiples strictly below the far edge.
    let steps = |extent: f64| -> usize {
        if extent <= 0.0 {
            return 0;
        }
        ((extent / spacing).ceil() as usize).saturating_sub(1)
    };
    let cols = steps(area.width());
    let rows = steps(area.height());
    let mut out = Vec::with_capacity(cols * rows);
    for r in 1..=rows {
        let y = area.y0 + spacing * r as f64;
        for c in 1..=cols {
            out.push(Point::new(area.x0 + spacing * c as f64, y));
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/compose/grid.rs"]
mod tests;
