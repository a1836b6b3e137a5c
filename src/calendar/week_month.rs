//! Assignment of weeks to calendar months
//!
//! Every weekly record rolls up into exactly one month: the month holding
//! most of the week's days, or the month of the week's end date on a tie.

use chrono::NaiveDate;

use super::week_calendar::{week_from_date, week_range};
use crate::error::HseResult;
use crate::models::{MonthKey, WeekIdentifier};

/// The calendar month a week belongs to
///
/// Inverted input is normalized first. A range inside one month maps to that
/// month directly; otherwise the month covering the most days wins, ties going
/// to the later month (for a two-month week, the month of its end date).
pub fn week_to_month_key(week_start: NaiveDate, week_end: NaiveDate) -> MonthKey {
    let (start, end) = if week_start > week_end {
        (week_end, week_start)
    } else {
        (week_start, week_end)
    };

    let first = MonthKey::of(start);
    let last = MonthKey::of(end);
    if first == last {
        return first;
    }

    let mut best = first;
    let mut best_days = days_within(first, start, end);
    let mut month = first.next();
    while month <= last {
        let days = days_within(month, start, end);
        if days >= best_days {
            best = month;
            best_days = days;
        }
        month = month.next();
    }
    best
}

/// Days of `start..=end` that fall inside `month`
fn days_within(month: MonthKey, start: NaiveDate, end: NaiveDate) -> i64 {
    let from = start.max(month.first_day());
    let to = end.min(month.last_day());
    if to < from {
        0
    } else {
        (to - from).num_days() + 1
    }
}

/// The month a fiscal week rolls up into
pub fn month_key_for_week(id: WeekIdentifier) -> HseResult<MonthKey> {
    let range = week_range(id)?;
    Ok(week_to_month_key(range.start(), range.end()))
}

/// All fiscal weeks that roll up into `month`, in order
pub fn weeks_for_month(month: MonthKey) -> HseResult<Vec<WeekIdentifier>> {
    let last_day = month.last_day();
    let mut weeks = Vec::new();
    let mut id = week_from_date(month.first_day());

    loop {
        let range = week_range(id)?;
        if range.start() > last_day {
            break;
        }
        if week_to_month_key(range.start(), range.end()) == month {
            weeks.push(id);
        }
        id = id.next();
    }

    Ok(weeks)
}
