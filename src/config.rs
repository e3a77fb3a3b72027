//! Run configuration: the layout profile and the planner config built from it.
//!
//! A [`Layout`] deserializes from JSON with every field optional, so a profile file only needs
//! to name what it overrides. Both [`Layout`] and [`PlannerConfig`] are validated up front;
//! nothing downstream re-checks numeric ranges.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::foundation::core::Size;
use crate::foundation::error::{BujoError, BujoResult};

/// Smallest accepted dot-grid spacing in points.
pub const MIN_GRID_SPACING: f64 = 4.0;

/// Page-size class of the output document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageSizeClass {
    /// US Letter, 612 x 792 pt.
    #[default]
    #[serde(alias = "letter")]
    Standard,
    /// Tablet-ratio page, 504 x 672 pt (about 7 x 9.333 in).
    #[serde(alias = "paperpro", alias = "compactdevice")]
    CompactDevice,
}

impl PageSizeClass {
    /// Page dimensions in points.
    pub fn size(self) -> Size {
        match self {
            Self::Standard => Size::new(612.0, 792.0),
            Self::CompactDevice => Size::new(504.0, 672.0),
        }
    }
}

impl FromStr for PageSizeClass {
    type Err = BujoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" | "letter" => Ok(Self::Standard),
            "compact-device" | "compactdevice" | "paperpro" => Ok(Self::CompactDevice),
            other => Err(BujoError::validation(format!(
                "unknown page size '{other}' (expected standard or compact-device)"
            ))),
        }
    }
}

/// Standard PDF font family used for all text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    /// Helvetica / Helvetica-Bold.
    #[default]
    Helvetica,
    /// Courier / Courier-Bold.
    Courier,
}

impl FontFamily {
    /// PDF base font names for the regular and bold faces.
    pub fn base_fonts(self) -> (&'static str, &'static str) {
        match self {
            Self::Helvetica => ("Helvetica", "Helvetica-Bold"),
            Self::Courier => ("Courier", "Courier-Bold"),
        }
    }
}

/// Layout profile shared read-only by every page builder.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Layout {
    /// Page-size class.
    pub page_size: PageSizeClass,
    /// Uniform page margin in points.
    pub margin: f64,
    /// Font family for all text.
    pub font: FontFamily,
    /// Page title size in points.
    pub title_size: f64,
    /// Section subtitle size in points.
    pub subtitle_size: f64,
    /// Body text size in points.
    pub body_size: f64,
    /// Distance between dot-grid markers in points.
    pub grid_spacing: f64,
    /// Emit one page per calendar week.
    pub show_weeks: bool,
    /// Emit one page per day (requires `show_weeks`).
    pub show_days: bool,
    /// Emit the collections hub and its pages.
    pub show_collections: bool,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            page_size: PageSizeClass::Standard,
            margin: 36.0,
            font: FontFamily::Helvetica,
            title_size: 24.0,
            subtitle_size: 14.0,
            body_size: 12.0,
            grid_spacing: 22.0,
            show_weeks: false,
            show_days: false,
            show_collections: true,
        }
    }
}

impl Layout {
    /// Parse a (possibly partial) layout profile from JSON.
    pub fn from_json_str(s: &str) -> BujoResult<Self> {
        serde_json::from_str(s).map_err(|e| BujoError::serde(e.to_string()))
    }

    /// Read and parse a layout profile file.
    pub fn from_json_path(path: impl AsRef<Path>) -> BujoResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            BujoError::validation(format!("read layout profile '{}': {e}", path.display()))
        })?;
        Self::from_json_str(&raw)
    }

    /// Toggle week and day pages together.
    pub fn with_full(mut self, full: bool) -> Self {
        self.show_weeks = full;
        self.show_days = full;
        self
    }

    /// Page dimensions in points.
    pub fn page_size(&self) -> Size {
        self.page_size.size()
    }

    /// Horizontal space between the left and right margins.
    pub fn content_width(&self) -> f64 {
        self.page_size().width - 2.0 * self.margin
    }

    /// Reject values that would produce a degenerate or non-terminating layout.
    pub fn validate(&self) -> BujoResult<()> {
        let page = self.page_size();
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(BujoError::validation("margin must be finite and >= 0"));
        }
        if 2.0 * self.margin >= page.width.min(page.height) {
            return Err(BujoError::validation(format!(
                "margin {} leaves no content area on a {}x{} pt page",
                self.margin, page.width, page.height
            )));
        }
        for (name, v) in [
            ("title_size", self.title_size),
            ("subtitle_size", self.subtitle_size),
            ("body_size", self.body_size),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(BujoError::validation(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }
        if !self.grid_spacing.is_finite() || self.grid_spacing < MIN_GRID_SPACING {
            return Err(BujoError::validation(format!(
                "grid_spacing must be finite and >= {MIN_GRID_SPACING} pt"
            )));
        }
        if self.show_days && !self.show_weeks {
            return Err(BujoError::validation(
                "day pages require week pages (show_days without show_weeks)",
            ));
        }
        Ok(())
    }
}

/// Immutable configuration for one planner build.
#[derive(Clone, Debug, PartialEq)]
pub struct PlannerConfig {
    /// Gregorian calendar year to generate.
    pub year: i32,
    /// Output document path.
    pub output: PathBuf,
    /// Layout profile.
    pub layout: Layout,
}

impl PlannerConfig {
    /// Build a validated configuration.
    pub fn new(year: i32, output: impl Into<PathBuf>, layout: Layout) -> BujoResult<Self> {
        let cfg = Self {
            year,
            output: output.into(),
            layout,
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Validate the year and the layout profile.
    pub fn validate(&self) -> BujoResult<()> {
        if !(1..=9998).contains(&self.year) {
            return Err(BujoError::validation(format!(
                "year {} out of range (must be 1..=9998)",
                self.year
            )));
        }
        self.layout.validate()
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
