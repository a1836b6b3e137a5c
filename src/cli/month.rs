//! CLI commands for the week-to-month mapping

use clap::Subcommand;

use crate::calendar::{week_range, week_to_month_key, weeks_for_month};
use crate::config::Settings;
use crate::error::HseResult;
use crate::models::MonthKey;

use super::parse_date;

/// Month subcommands
#[derive(Subcommand, Debug)]
pub enum MonthCommands {
    /// List the fiscal weeks that roll up into a month
    Weeks {
        /// Month (YYYY-MM)
        month: String,
    },
}

/// Handle month commands
pub fn handle_month_command(settings: &Settings, cmd: MonthCommands) -> HseResult<()> {
    match cmd {
        MonthCommands::Weeks { month } => {
            let month = MonthKey::parse(&month)?;
            let weeks = weeks_for_month(month)?;

            println!("{} ({} weeks)", month.friendly_name(), weeks.len());
            for id in weeks {
                let range = week_range(id)?;
                let days_in_month = range.days().filter(|d| month.contains(*d)).count();
                println!(
                    "  {}  {} - {}  ({} of 7 days)",
                    id,
                    range.start().format(&settings.date_format),
                    range.end().format(&settings.date_format),
                    days_in_month
                );
            }
        }
    }

    Ok(())
}

/// Print the month key a week date range rolls up into
pub fn handle_month_key(start: &str, end: &str) -> HseResult<()> {
    let start = parse_date(start)?;
    let end = parse_date(end)?;
    println!("{}", week_to_month_key(start, end));
    Ok(())
}
