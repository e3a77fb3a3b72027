use crate::anchors::target::AnchorHandle;
use crate::compose::grid::{GridLayout, GridSpec, dot_grid_points, layout_grid};
use crate::config::Layout;
use crate::draw::{Align, FontStyle, Surface};
use crate::foundation::core::{Rect, Rgb8};
use crate::foundation::error::BujoResult;

/// Label of the nav bar's back region.
pub const BACK_LABEL: &str = "< Back";
/// Label of the nav bar's home region.
pub const HOME_LABEL: &str = "Home";

const NAV_HEIGHT: f64 = 16.0;
const BACK_WIDTH: f64 = 42.0;
const HOME_WIDTH: f64 = 60.0;
const NAV_ROW_FACTOR: f64 = 0.6;
const AFTER_NAV: f64 = 4.0;
const AFTER_TITLE: f64 = 6.0;
const AFTER_SUBTITLE: f64 = 10.0;
const BEFORE_GRID: f64 = 6.0;
const AFTER_GRID: f64 = 16.0;
const DOT_RADIUS: f64 = 0.6;

/// One page being composed: the surface, the layout, and a vertical cursor.
///
/// Creating a composer starts the page and binds its anchor before anything else is drawn.
pub struct PageComposer<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
    layout: &'a Layout,
    cursor: f64,
}

impl<'a, S: Surface + ?Sized> PageComposer<'a, S> {
    /// Start a page owned by `anchor`.
    pub fn begin(surface: &'a mut S, layout: &'a Layout, anchor: AnchorHandle) -> BujoResult<Self> {
        surface.begin_page()?;
        surface.bind_anchor(anchor)?;
        Ok(Self {
            surface,
            layout,
            cursor: layout.margin,
        })
    }

    /// Current vertical position.
    pub fn cursor(&self) -> f64 {
        self.cursor
    }

    /// Layout in effect for this page.
    pub fn layout(&self) -> &Layout {
        self.layout
    }

    /// Direct access to the drawing surface.
    pub fn surface(&mut self) -> &mut S {
        self.surface
    }

    /// Back link top-left, home link top-right; each omitted when its target is `None`.
    pub fn nav(&mut self, home: Option<AnchorHandle>, back: Option<AnchorHandle>) -> BujoResult<()> {
        let top = self.layout.margin * NAV_ROW_FACTOR;
        let width = self.surface.page_size().width;
        self.surface.set_font(FontStyle::Bold, self.layout.body_size);
        self.surface.set_text_color(Rgb8::BLACK);
        if let Some(back) = back {
            let region = Rect::new(
                self.layout.margin,
                top,
                self.layout.margin + BACK_WIDTH,
                top + NAV_HEIGHT,
            );
            self.surface.draw_text(region, BACK_LABEL, Align::Left)?;
            self.surface.link(region, back)?;
        }
        if let Some(home) = home {
            let right = width - self.layout.margin;
            let region = Rect::new(right - HOME_WIDTH, top, right, top + NAV_HEIGHT);
            self.surface.draw_text(region, HOME_LABEL, Align::Right)?;
            self.surface.link(region, home)?;
        }
        self.cursor = self.cursor.max(top + NAV_HEIGHT + AFTER_NAV);
        Ok(())
    }

    /// Bold centered page title.
    pub fn title(&mut self, text: &str) -> BujoResult<()> {
        let size = self.layout.title_size;
        self.centered_line(FontStyle::Bold, size, text)?;
        self.cursor += AFTER_TITLE;
        Ok(())
    }

    /// Regular centered section heading.
    pub fn subtitle(&mut self, text: &str) -> BujoResult<()> {
        let size = self.layout.subtitle_size;
        self.centered_line(FontStyle::Regular, size, text)?;
        self.cursor += AFTER_SUBTITLE;
        Ok(())
    }

    fn centered_line(&mut self, style: FontStyle, size: f64, text: &str) -> BujoResult<()> {
        let cell = Rect::new(
            self.layout.margin,
            self.cursor,
            self.layout.margin + self.layout.content_width(),
            self.cursor + size,
        );
        self.surface.set_font(style, size);
        self.surface.set_text_color(Rgb8::BLACK);
        self.surface.draw_text(cell, text, Align::Center)?;
        self.cursor = cell.y1;
        Ok(())
    }

    /// Labeled cells in a wrapping grid, the i-th cell linked to `anchors[i]` when present.
    pub fn grid_links(
        &mut self,
        spec: GridSpec,
        labels: &[&str],
        anchors: &[Option<AnchorHandle>],
    ) -> BujoResult<GridLayout> {
        let grid = layout_grid(
            spec,
            labels.len(),
            self.layout.margin,
            self.cursor + BEFORE_GRID,
            self.layout.content_width(),
        );
        self.surface.set_font(FontStyle::Regular, self.layout.body_size);
        self.surface.set_text_color(Rgb8::BLACK);
        for (idx, (cell, label)) in grid.cells.iter().zip(labels).enumerate() {
            self.surface.stroke_rect(*cell)?;
            self.surface.draw_text(*cell, label, Align::Center)?;
            if let Some(target) = anchors.get(idx).copied().flatten() {
                self.surface.link(*cell, target)?;
            }
        }
        self.cursor = grid.bottom + AFTER_GRID;
        Ok(grid)
    }

    /// One text row at the cursor, optionally linked across its whole cell; advances the cursor.
    pub fn row(
        &mut self,
        x: f64,
        width: f64,
        height: f64,
        text: &str,
        align: Align,
        link: Option<AnchorHandle>,
    ) -> BujoResult<Rect> {
        let cell = Rect::new(x, self.cursor, x + width, self.cursor + height);
        self.surface.draw_text(cell, text, align)?;
        if let Some(target) = link {
            self.surface.link(cell, target)?;
        }
        self.cursor = cell.y1;
        Ok(cell)
    }

    /// Move the cursor to `y`.
    pub fn set_cursor(&mut self, y: f64) {
        self.cursor = y;
    }

    /// Fill the rest of the page, inside the margins, with the dot grid. Returns the dot count.
    pub fn dot_grid(&mut self) -> BujoResult<usize> {
        let page = self.surface.page_size();
        let m = self.layout.margin;
        let area = Rect::new(m, self.cursor.max(m), page.width - m, page.height - m);
        let points = dot_grid_points(area, self.layout.grid_spacing);
        for p in &points {
            self.surface.fill_circle(*p, DOT_RADIUS)?;
        }
        Ok(points.len())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/page.rs"]
mod tests;
