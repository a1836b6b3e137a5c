//! Fiscal week calendar and week-to-month mapping
//!
//! Pure date calculations: no clock reads, no I/O. Callers that need the
//! current week pass today's date in.

pub mod week_calendar;
pub mod week_month;

pub use week_calendar::{
    all_weeks_for_year, current_week, fiscal_year_bounds, fiscal_year_days, fiscal_year_of,
    format_week, is_overflow_day, week1_start, week_dates, week_from_date, week_range,
};
pub use week_month::{month_key_for_week, week_to_month_key, weeks_for_month};
