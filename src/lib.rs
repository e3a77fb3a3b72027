//! bujo generates a hyperlinked bullet-journal planner as a single PDF.
//!
//! A build runs in two phases:
//!
//! - [`allocate_links`] walks the configured year and hands out one [`AnchorHandle`] per page
//! - [`render_planner`] emits every page onto a [`Surface`], resolving links through the frozen
//!   [`Links`] table
//!
//! [`build_planner`] runs both against a [`PdfSurface`] and writes the document to disk.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod anchors;
pub(crate) mod build;
pub(crate) mod calendar;
pub(crate) mod compose;
pub mod config;
pub mod draw;

pub use crate::foundation::core::{Point, Rect, Rgb8, Size};
pub use crate::foundation::error::{BujoError, BujoResult};

pub use crate::anchors::registry::{AnchorRegistry, Links};
pub use crate::anchors::target::{AnchorHandle, AnchorTarget, Collection};
pub use crate::build::planner::{
    BuildStats, allocate_links, build_planner, build_planner_bytes, render_planner,
};
pub use crate::calendar::date::{
    DateKey, days_in_month, first_of_month, is_leap_year, last_of_month, month_abbrev,
    month_name,
};
pub use crate::calendar::weeks::{CalendarWeek, weeks_of_month};
pub use crate::compose::grid::{GridLayout, GridSpec, dot_grid_points, layout_grid};
pub use crate::compose::page::{BACK_LABEL, HOME_LABEL, PageComposer};
pub use crate::compose::pages::{
    COLUMN_GAP, DAY_COLUMN_WIDTH, ROW_HEIGHT, WEEK_COLUMN_WIDTH, collection_page,
    collections_hub_page, day_page, month_page, week_page, year_page,
};
pub use crate::config::{FontFamily, Layout, MIN_GRID_SPACING, PageSizeClass, PlannerConfig};
pub use crate::draw::metrics::{encode_win_ansi, text_width};
pub use crate::draw::pdf::{DocumentInfo, PdfSurface, ensure_parent_dir};
pub use crate::draw::record::{RecordedLink, RecordedPage, RecordedText, RecordingSurface};
pub use crate::draw::{Align, CELL_PADDING, FontStyle, Surface};
