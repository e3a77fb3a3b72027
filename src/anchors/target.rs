use std::num::NonZeroU32;

use crate::calendar::date::DateKey;

/// Opaque identifier for a navigation target inside the output document.
///
/// Handles are never zero, so "no link" is spelled `Option<AnchorHandle>::None` rather than a
/// sentinel value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AnchorHandle(NonZeroU32);

impl AnchorHandle {
    pub(crate) fn from_index(index: u32) -> Option<Self> {
        NonZeroU32::new(index).map(Self)
    }

    /// Raw allocation number, starting at 1.
    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Destination name used when the anchor is written to a document.
    pub fn dest_name(self) -> String {
        format!("a{}", self.0)
    }
}

impl std::fmt::Display for AnchorHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Fixed set of free-form collection pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Collection {
    /// Drafts and long-form notes.
    Writing,
    /// Loose ideas.
    Ideas,
    /// Out-of-office planning.
    Ooo,
}

impl Collection {
    /// Every collection in page order.
    pub const ALL: [Self; 3] = [Self::Writing, Self::Ideas, Self::Ooo];

    /// Label shown on grid cells and page titles.
    pub fn label(self) -> &'static str {
        match self {
            Self::Writing => "Writing",
            Self::Ideas => "Ideas",
            Self::Ooo => "OOO",
        }
    }
}

/// Logical navigation target that owns exactly one page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AnchorTarget {
    /// The year hub.
    Year,
    /// Month page, 1..=12.
    Month(u32),
    /// Week page: the `index`-th (0-based) week listed on `month`'s page.
    Week {
        /// Month whose page lists the week.
        month: u32,
        /// Position in the month's week list.
        index: usize,
    },
    /// Day page for an in-year date.
    Day(DateKey),
    /// Index page of all collections.
    CollectionsHub,
    /// One collection page.
    Collection(Collection),
}

impl std::fmt::Display for AnchorTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Year => write!(f, "year"),
            Self::Month(m) => write!(f, "month {m}"),
            Self::Week { month, index } => write!(f, "month {month} week {index}"),
            Self::Day(d) => write!(f, "day {d}"),
            Self::CollectionsHub => write!(f, "collections hub"),
            Self::Collection(c) => write!(f, "collection {}", c.label()),
        }
    }
}
