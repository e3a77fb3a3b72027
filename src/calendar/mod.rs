//! Pure Gregorian date arithmetic for planner pages.
//!
//! Everything here works on `chrono::NaiveDate`, which carries no time zone, so stepping across
//! month and year boundaries is unambiguous at day granularity.

pub(crate) mod date;
pub(crate) mod weeks;
