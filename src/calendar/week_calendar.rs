//! 52-week fiscal calendar
//!
//! Week 1 of fiscal year `Y` starts on the last Saturday on or before
//! December 31 of `Y - 1`, so it always begins between December 25 and
//! December 31. Every fiscal week runs Saturday through Friday.
//!
//! The distance between two consecutive Week 1 anchors is 364 days in most
//! years and 371 days when the anchor wraps from December 25 back to
//! December 31. In the longer years the seven days after Week 52's Friday
//! are overflow days: they still belong to fiscal year `Y` and are reported
//! as week 52, so a week number is always in 1..=52.
//!
//! Date lookups are total over chrono's date range. Lookups by year fail with
//! `InvalidArgument` when the year's dates can't be represented.

use chrono::{Datelike, Days, NaiveDate};
use tracing::debug;

use crate::error::{HseError, HseResult};
use crate::models::{WeekIdentifier, WeekInfo, WeekRange, WEEKS_PER_YEAR};

/// Days covered by weeks 1..=52
const NOMINAL_YEAR_DAYS: i64 = WEEKS_PER_YEAR as i64 * 7;

/// The Saturday that anchors Week 1 of `year`
pub fn week1_start(year: i32) -> HseResult<NaiveDate> {
    let dec_31 = year
        .checked_sub(1)
        .and_then(|prev| NaiveDate::from_ymd_opt(prev, 12, 31))
        .ok_or_else(|| HseError::year_out_of_range(year))?;
    // Saturday -> 0, Sunday -> 1, ..., Friday -> 6
    let days_back = (dec_31.weekday().num_days_from_sunday() + 1) % 7;
    dec_31
        .checked_sub_days(Days::new(u64::from(days_back)))
        .ok_or_else(|| HseError::year_out_of_range(year))
}

/// Week 1 anchor clamped to the representable range
///
/// Only the earliest representable calendar year lacks an anchor; its fiscal
/// year is treated as starting at `NaiveDate::MIN`.
fn anchor(year: i32) -> NaiveDate {
    week1_start(year).unwrap_or(if year < 0 {
        NaiveDate::MIN
    } else {
        NaiveDate::MAX
    })
}

/// The Saturday..=Friday range of a fiscal week
pub fn week_range(id: WeekIdentifier) -> HseResult<WeekRange> {
    let offset = Days::new(u64::from(id.week() - 1) * 7);
    let start = week1_start(id.year())?
        .checked_add_days(offset)
        .ok_or_else(|| HseError::year_out_of_range(id.year()))?;
    WeekRange::new(start)
}

/// The Saturday..=Friday range of `week` in fiscal `year`
///
/// Fails with [`HseError::InvalidArgument`] when `week` is outside 1..=52 or
/// the year's dates can't be represented.
pub fn week_dates(week: u32, year: i32) -> HseResult<WeekRange> {
    week_range(WeekIdentifier::new(week, year)?)
}

/// The fiscal year that owns `date`
///
/// Fiscal year `Y` owns every date in `week1_start(Y)..week1_start(Y + 1)`.
pub fn fiscal_year_of(date: NaiveDate) -> i32 {
    // Anchors fall in the last week of December, so only the neighbouring
    // fiscal years can own a date of calendar year `date.year()`.
    let year = date.year();
    if date < anchor(year) {
        year - 1
    } else if date >= anchor(year + 1) {
        year + 1
    } else {
        year
    }
}

/// Number of days in fiscal `year` (364, or 371 with overflow days)
pub fn fiscal_year_days(year: i32) -> HseResult<i64> {
    let (start, end) = fiscal_year_bounds(year)?;
    Ok((end - start).num_days() + 1)
}

/// First and last day owned by fiscal `year`, including any overflow days
pub fn fiscal_year_bounds(year: i32) -> HseResult<(NaiveDate, NaiveDate)> {
    let next = year
        .checked_add(1)
        .ok_or_else(|| HseError::year_out_of_range(year))?;
    let start = week1_start(year)?;
    let end = week1_start(next)?
        .pred_opt()
        .ok_or_else(|| HseError::year_out_of_range(year))?;
    Ok((start, end))
}

/// Check if `date` is one of the overflow days after Week 52's Friday
pub fn is_overflow_day(date: NaiveDate) -> bool {
    let year = fiscal_year_of(date);
    (date - anchor(year)).num_days() >= NOMINAL_YEAR_DAYS
}

/// The fiscal (week, year) that `date` falls in
pub fn week_from_date(date: NaiveDate) -> WeekIdentifier {
    let year = fiscal_year_of(date);
    let days_since_start = (date - anchor(year)).num_days();

    if days_since_start >= NOMINAL_YEAR_DAYS {
        debug!(%date, year, "overflow day folded into week 52");
        return WeekIdentifier::new_unchecked(WEEKS_PER_YEAR, year);
    }

    // 0 <= days_since_start < 364 once the owning year is known
    let week = u32::try_from(days_since_start / 7).unwrap_or(0) + 1;
    WeekIdentifier::new_unchecked(week, year)
}

/// The fiscal week containing `today`
///
/// The caller supplies the current date, keeping this module free of clock reads.
pub fn current_week(today: NaiveDate) -> WeekIdentifier {
    week_from_date(today)
}

/// All 52 weeks of fiscal `year`, in week order
pub fn all_weeks_for_year(year: i32) -> HseResult<Vec<WeekInfo>> {
    (1..=WEEKS_PER_YEAR)
        .map(|week| {
            let id = WeekIdentifier::new(week, year)?;
            let range = week_range(id)?;
            Ok(WeekInfo {
                id,
                range,
                label: week_label(week, &range),
            })
        })
        .collect()
}

/// Human-readable rendering of a week, e.g. "Week 2 (Jan 03 - Jan 09, 2026)"
pub fn format_week(week: u32, year: i32) -> HseResult<String> {
    let range = week_dates(week, year)?;
    Ok(week_label(week, &range))
}

fn week_label(week: u32, range: &WeekRange) -> String {
    format!(
        "Week {} ({} - {})",
        week,
        range.start().format("%b %d"),
        range.end().format("%b %d, %Y")
    )
}

impl TryFrom<WeekIdentifier> for WeekRange {
    type Error = HseError;

    fn try_from(id: WeekIdentifier) -> Result<Self, Self::Error> {
        week_range(id)
    }
}
