use std::collections::HashMap;

use crate::anchors::target::AnchorHandle;
use crate::draw::{Align, FontStyle, Surface};
use crate::foundation::core::{Point, Rect, Rgb8, Size};
use crate::foundation::error::{BujoError, BujoResult};

/// Text drawn on a recorded page.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedText {
    /// Cell the text was placed in.
    pub cell: Rect,
    /// The text itself.
    pub text: String,
    /// Horizontal alignment.
    pub align: Align,
    /// Font face.
    pub style: FontStyle,
    /// Font size in points.
    pub size: f64,
    /// Text color.
    pub color: Rgb8,
}

/// Clickable region drawn on a recorded page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RecordedLink {
    /// Clickable area.
    pub region: Rect,
    /// Anchor the region navigates to.
    pub target: AnchorHandle,
}

/// Everything drawn on one page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordedPage {
    /// Anchors bound to this page, in bind order.
    pub anchors: Vec<AnchorHandle>,
    /// Text in draw order.
    pub texts: Vec<RecordedText>,
    /// Links in draw order.
    pub links: Vec<RecordedLink>,
    /// Stroked rectangles.
    pub rects: Vec<Rect>,
    /// Filled circles (dot-grid markers).
    pub dots: Vec<Point>,
}

impl RecordedPage {
    /// First bold text that is not a nav label; the page title on planner pages.
    pub fn title(&self) -> Option<&str> {
        self.texts
            .iter()
            .find(|t| t.style == FontStyle::Bold && !is_nav_label(&t.text))
            .map(|t| t.text.as_str())
    }

    /// Link whose region starts at the given top-left corner, if any.
    pub fn link_at(&self, origin: Point) -> Option<AnchorHandle> {
        self.links
            .iter()
            .find(|l| l.region.origin() == origin)
            .map(|l| l.target)
    }

    /// Whether any text on the page equals `text`.
    pub fn has_text(&self, text: &str) -> bool {
        self.texts.iter().any(|t| t.text == text)
    }
}

fn is_nav_label(text: &str) -> bool {
    text == crate::compose::page::BACK_LABEL || text == crate::compose::page::HOME_LABEL
}

/// In-memory [`Surface`] that records pages instead of encoding them.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    size: Size,
    pages: Vec<RecordedPage>,
    bound: HashMap<AnchorHandle, usize>,
    style: FontStyle,
    font_size: f64,
    color: Rgb8,
}

impl RecordingSurface {
    /// Create an empty recording with the given page size.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            pages: Vec::new(),
            bound: HashMap::new(),
            style: FontStyle::Regular,
            font_size: 12.0,
            color: Rgb8::BLACK,
        }
    }

    /// Pages in emission order.
    pub fn pages(&self) -> &[RecordedPage] {
        &self.pages
    }

    /// Index of the page `anchor` was bound to.
    pub fn page_index_of(&self, anchor: AnchorHandle) -> Option<usize> {
        self.bound.get(&anchor).copied()
    }

    /// Page `anchor` was bound to.
    pub fn page_of(&self, anchor: AnchorHandle) -> Option<&RecordedPage> {
        self.page_index_of(anchor).and_then(|i| self.pages.get(i))
    }

    /// Link targets on any page that were never bound.
    pub fn dangling_links(&self) -> Vec<AnchorHandle> {
        let mut out: Vec<AnchorHandle> = self
            .pages
            .iter()
            .flat_map(|p| p.links.iter().map(|l| l.target))
            .filter(|t| !self.bound.contains_key(t))
            .collect();
        out.sort();
        out.dedup();
        out
    }

    fn current(&mut self) -> BujoResult<&mut RecordedPage> {
        self.pages
            .last_mut()
            .ok_or_else(|| BujoError::draw("drawing before the first page"))
    }
}

impl Surface for RecordingSurface {
    fn page_size(&self) -> Size {
        self.size
    }

    fn begin_page(&mut self) -> BujoResult<()> {
        self.pages.push(RecordedPage::default());
        Ok(())
    }

    fn bind_anchor(&mut self, anchor: AnchorHandle) -> BujoResult<()> {
        let idx = self
            .pages
            .len()
            .checked_sub(1)
            .ok_or_else(|| BujoError::draw("binding an anchor before the first page"))?;
        if self.bound.contains_key(&anchor) {
            return Err(BujoError::anchor(format!("anchor {anchor} bound twice")));
        }
        self.bound.insert(anchor, idx);
        self.current()?.anchors.push(anchor);
        Ok(())
    }

    fn set_font(&mut self, style: FontStyle, size: f64) {
        self.style = style;
        self.font_size = size;
    }

    fn set_text_color(&mut self, color: Rgb8) {
        self.color = color;
    }

    fn draw_text(&mut self, cell: Rect, text: &str, align: Align) -> BujoResult<()> {
        let item = RecordedText {
            cell,
            text: text.to_string(),
            align,
            style: self.style,
            size: self.font_size,
            color: self.color,
        };
        self.current()?.texts.push(item);
        Ok(())
    }

    fn fill_circle(&mut self, center: Point, _radius: f64) -> BujoResult<()> {
        self.current()?.dots.push(center);
        Ok(())
    }

    fn stroke_rect(&mut self, rect: Rect) -> BujoResult<()> {
        self.current()?.rects.push(rect);
        Ok(())
    }

    fn link(&mut self, region: Rect, target: AnchorHandle) -> BujoResult<()> {
        self.current()?.links.push(RecordedLink { region, target });
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/draw/record.rs"]
mod tests;
