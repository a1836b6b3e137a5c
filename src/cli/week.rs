//! CLI commands for the fiscal week calendar

use chrono::NaiveDate;
use clap::Subcommand;

use crate::calendar::{
    all_weeks_for_year, current_week, fiscal_year_bounds, format_week, is_overflow_day,
    week_from_date, week_range,
};
use crate::config::Settings;
use crate::display::{format_week_details, format_week_list};
use crate::error::HseResult;
use crate::models::{WeekIdentifier, WeekInfo};

use super::{parse_date, today};

/// Week subcommands
#[derive(Subcommand, Debug)]
pub enum WeekCommands {
    /// Show the fiscal week containing today
    Current {
        /// Use this date instead of today (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },

    /// Show the fiscal week after the current one
    Next {
        /// Use this date instead of today (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },

    /// Show the fiscal week before the current one
    #[command(alias = "previous")]
    Prev {
        /// Use this date instead of today (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },

    /// Show the Saturday-Friday dates of a fiscal week
    Dates {
        /// Week number (1-52)
        week: u32,
        /// Fiscal year
        year: i32,
    },

    /// Show the fiscal week a date falls in
    Of {
        /// Date (YYYY-MM-DD)
        date: String,
    },

    /// List all 52 weeks of a fiscal year
    List {
        /// Fiscal year (defaults to the current one)
        year: Option<i32>,
    },
}

/// Handle week commands
pub fn handle_week_command(settings: &Settings, cmd: WeekCommands) -> HseResult<()> {
    match cmd {
        WeekCommands::Current { date } => {
            let id = current_week(reference_date(date)?);
            println!("{}", format_week_details(&week_info(id)?, &settings.date_format));
        }
        WeekCommands::Next { date } => {
            let id = current_week(reference_date(date)?).next();
            println!("{}", format_week_details(&week_info(id)?, &settings.date_format));
        }
        WeekCommands::Prev { date } => {
            let id = current_week(reference_date(date)?).prev();
            println!("{}", format_week_details(&week_info(id)?, &settings.date_format));
        }
        WeekCommands::Dates { week, year } => {
            let id = WeekIdentifier::new(week, year)?;
            println!("{}", format_week_details(&week_info(id)?, &settings.date_format));
        }
        WeekCommands::Of { date } => {
            let date = parse_date(&date)?;
            let id = week_from_date(date);
            println!("{}", format_week_details(&week_info(id)?, &settings.date_format));
            if is_overflow_day(date) {
                println!(
                    "Note: {} falls after Week 52's Friday and is counted in Week 52.",
                    date.format(&settings.date_format)
                );
            }
        }
        WeekCommands::List { year } => {
            let this_week = current_week(today());
            let year = year.unwrap_or(this_week.year());
            let (start, end) = fiscal_year_bounds(year)?;

            println!(
                "Fiscal year {}: {} to {}\n",
                year,
                start.format(&settings.date_format),
                end.format(&settings.date_format)
            );
            print!(
                "{}",
                format_week_list(
                    &all_weeks_for_year(year)?,
                    &settings.date_format,
                    Some(this_week)
                )
            );
        }
    }

    Ok(())
}

fn reference_date(date: Option<String>) -> HseResult<NaiveDate> {
    match date {
        Some(d) => parse_date(&d),
        None => Ok(today()),
    }
}

fn week_info(id: WeekIdentifier) -> HseResult<WeekInfo> {
    let range = week_range(id)?;
    let label = format_week(id.week(), id.year())?;
    Ok(WeekInfo { id, range, label })
}
