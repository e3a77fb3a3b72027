use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::calendar::date::{first_of_month, last_of_month};
use crate::foundation::error::{BujoError, BujoResult};

/// Seven consecutive dates, Monday first.
///
/// A week is listed by the month whose page shows it; leading and trailing dates may belong to
/// the neighbouring months.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CalendarWeek {
    days: [NaiveDate; 7],
}

impl CalendarWeek {
    /// Build the week that starts on `monday`.
    pub fn starting(monday: NaiveDate) -> BujoResult<Self> {
        if monday.weekday() != Weekday::Mon {
            return Err(BujoError::validation(format!(
                "calendar week must start on a Monday, got {monday}"
            )));
        }
        let mut days = [monday; 7];
        let mut cur = monday;
        for slot in &mut days {
            *slot = cur;
            cur = step(cur)?;
        }
        Ok(Self { days })
    }

    /// All seven dates in order.
    pub fn days(&self) -> &[NaiveDate; 7] {
        &self.days
    }

    /// The Monday.
    pub fn first(&self) -> NaiveDate {
        self.days[0]
    }

    /// The Sunday.
    pub fn last(&self) -> NaiveDate {
        self.days[6]
    }

    /// Dates of this week that fall inside `month` of `year`.
    pub fn in_month(&self, year: i32, month: u32) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days
            .iter()
            .copied()
            .filter(move |d| d.year() == year && d.month() == month)
    }
}

/// Calendar weeks covering `month` of `year`, Monday-first.
///
/// The first week starts on the Monday on or before the 1st. Weeks are emitted in 7-day strides
/// until the cursor has moved past the month's last day and sits on a Monday, so no week is split
/// and the final week may run into the next month.
pub fn weeks_of_month(year: i32, month: u32) -> BujoResult<Vec<CalendarWeek>> {
    let first = first_of_month(year, month)?;
    let last = last_of_month(year, month)?;
    let offset = first.weekday().num_days_from_monday();
    let start = first
        .checked_sub_days(Days::new(u64::from(offset)))
        .ok_or_else(|| BujoError::validation(format!("no Monday before {first}")))?;

    let mut weeks = Vec::with_capacity(6);
    let mut cur = start;
    loop {
        let week = CalendarWeek::starting(cur)?;
        cur = week
            .last()
            .succ_opt()
            .ok_or_else(|| BujoError::validation(format!("no day after {}", week.last())))?;
        weeks.push(week);
        if cur > last && cur.weekday() == Weekday::Mon {
            break;
        }
    }
    Ok(weeks)
}

fn step(d: NaiveDate) -> BujoResult<NaiveDate> {
    d.succ_opt()
        .ok_or_else(|| BujoError::validation(format!("no day after {d}")))
}

#[cfg(test)]
#[path = "../../tests/unit/calendar/weeks.rs"]
mod tests;
