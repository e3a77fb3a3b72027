use chrono::{Datelike, NaiveDate};

use crate::foundation::error::{BujoError, BujoResult};

/// Value-typed calendar date used as the key for day anchors.
///
/// Ordering is chronological (year, then month, then day). `Display` renders ISO `YYYY-MM-DD`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey {
    year: i32,
    month: u8,
    day: u8,
}

impl DateKey {
    /// Build a key for a real Gregorian date.
    pub fn new(year: i32, month: u32, day: u32) -> BujoResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self::from)
            .ok_or_else(|| BujoError::validation(format!("invalid date {year}-{month}-{day}")))
    }

    /// Gregorian year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Month, 1..=12.
    pub fn month(self) -> u32 {
        u32::from(self.month)
    }

    /// Day of month, 1..=31.
    pub fn day(self) -> u32 {
        u32::from(self.day)
    }

    /// The same date as a `chrono` value.
    pub fn to_naive(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month(), self.day())
    }
}

impl From<NaiveDate> for DateKey {
    fn from(d: NaiveDate) -> Self {
        // month() and day() are bounded by 12 and 31.
        Self {
            year: d.year(),
            month: d.month() as u8,
            day: d.day() as u8,
        }
    }
}

impl std::fmt::Display for DateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Gregorian leap rule: divisible by 4, except centuries not divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// First day of `month` in `year`.
pub fn first_of_month(year: i32, month: u32) -> BujoResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| BujoError::validation(format!("invalid month {year}-{month}")))
}

/// Last day of `month`: the day before the first of the following month.
///
/// December rolls over into January of `year + 1`.
pub fn last_of_month(year: i32, month: u32) -> BujoResult<NaiveDate> {
    first_of_month(year, month)?;
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    first_of_month(next_year, next_month)?
        .pred_opt()
        .ok_or_else(|| BujoError::validation(format!("no day before {next_year}-{next_month}-01")))
}

/// Number of days in `month` of `year`, leap-year correct.
pub fn days_in_month(year: i32, month: u32) -> BujoResult<u32> {
    Ok(last_of_month(year, month)?.day())
}

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Full English month name for `month` in 1..=12.
pub fn month_name(month: u32) -> Option<&'static str> {
    let idx = usize::try_from(month).ok()?.checked_sub(1)?;
    MONTH_NAMES.get(idx).copied()
}

/// Three-letter English month abbreviation for `month` in 1..=12.
pub fn month_abbrev(month: u32) -> Option<&'static str> {
    month_name(month).and_then(|name| name.get(..3))
}

#[cfg(test)]
#[path = "../../tests/unit/calendar/date.rs"]
mod tests;
