//! Drawing collaborator consumed by the page builders.
//!
//! Coordinates are points with the origin at the top-left page corner and y growing downward.
//! Backends translate to their own space.

pub(crate) mod metrics;
pub(crate) mod pdf;
pub(crate) mod record;

use crate::anchors::target::AnchorHandle;
use crate::foundation::core::{Point, Rect, Rgb8, Size};
use crate::foundation::error::BujoResult;

/// Face of the configured font family.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontStyle {
    /// Regular weight.
    #[default]
    Regular,
    /// Bold weight.
    Bold,
}

/// Horizontal placement of text inside its cell. Text is always centered vertically.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Align {
    /// Flush left, inset by the cell padding.
    #[default]
    Left,
    /// Centered.
    Center,
    /// Flush right, inset by the cell padding.
    Right,
}

/// Inset applied to left- and right-aligned text.
pub const CELL_PADDING: f64 = 2.0;

/// Page-level drawing and anchor operations.
///
/// Call order contract: [`Surface::begin_page`] precedes every other drawing call for that page,
/// and [`Surface::bind_anchor`] is called at most once per anchor across the whole document.
pub trait Surface {
    /// Page dimensions in points.
    fn page_size(&self) -> Size;
    /// Start a new page; later calls draw onto it.
    fn begin_page(&mut self) -> BujoResult<()>;
    /// Make `anchor` resolve to the current page.
    fn bind_anchor(&mut self, anchor: AnchorHandle) -> BujoResult<()>;
    /// Select the face and size for subsequent text.
    fn set_font(&mut self, style: FontStyle, size: f64);
    /// Select the color for subsequent text.
    fn set_text_color(&mut self, color: Rgb8);
    /// Draw one line of text inside `cell`.
    fn draw_text(&mut self, cell: Rect, text: &str, align: Align) -> BujoResult<()>;
    /// Draw a filled black circle.
    fn fill_circle(&mut self, center: Point, radius: f64) -> BujoResult<()>;
    /// Draw a thin black rectangle outline.
    fn stroke_rect(&mut self, rect: Rect) -> BujoResult<()>;
    /// Make `region` a clickable link to `target`.
    fn link(&mut self, region: Rect, target: AnchorHandle) -> BujoResult<()>;
}
