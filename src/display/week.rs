//! Fiscal week display formatting
//!
//! Formats fiscal weeks for terminal output in table and detail views.

use crate::calendar::week_to_month_key;
use crate::models::{WeekIdentifier, WeekInfo};

/// Format the weeks of a fiscal year as a table
///
/// `highlight` marks one week (usually the current one) with an asterisk.
pub fn format_week_list(
    weeks: &[WeekInfo],
    date_format: &str,
    highlight: Option<WeekIdentifier>,
) -> String {
    if weeks.is_empty() {
        return "No weeks found.".to_string();
    }

    let rows: Vec<(String, String, String, String)> = weeks
        .iter()
        .map(|info| {
            (
                info.id.to_string(),
                info.range.start().format(date_format).to_string(),
                info.range.end().format(date_format).to_string(),
                week_to_month_key(info.range.start(), info.range.end()).to_string(),
            )
        })
        .collect();

    let date_width = rows
        .iter()
        .map(|(_, start, end, _)| start.len().max(end.len()))
        .max()
        .unwrap_or(5)
        .max(5);

    let mut output = String::new();
    output.push_str(&format!(
        "  {:<8}  {:<date_width$}  {:<date_width$}  {}\n",
        "Week",
        "Start",
        "End",
        "Month",
        date_width = date_width,
    ));
    output.push_str(&format!(
        "  {:-<8}  {:-<date_width$}  {:-<date_width$}  {:-<7}\n",
        "",
        "",
        "",
        "",
        date_width = date_width,
    ));

    for (info, (id, start, end, month)) in weeks.iter().zip(rows) {
        let marker = if highlight == Some(info.id) { '*' } else { ' ' };
        output.push_str(&format!(
            "{} {:<8}  {:<date_width$}  {:<date_width$}  {}\n",
            marker,
            id,
            start,
            end,
            month,
            date_width = date_width,
        ));
    }

    output
}

/// Format a single week with its dates and owning month
pub fn format_week_details(info: &WeekInfo, date_format: &str) -> String {
    let month = week_to_month_key(info.range.start(), info.range.end());

    let mut output = String::new();
    output.push_str(&format!("{}\n", info.label));
    output.push_str(&format!("  Week:  {}\n", info.id));
    output.push_str(&format!(
        "  Start: {} ({})\n",
        info.range.start().format(date_format),
        info.range.start().format("%A")
    ));
    output.push_str(&format!(
        "  End:   {} ({})\n",
        info.range.end().format(date_format),
        info.range.end().format("%A")
    ));
    output.push_str(&format!("  Month: {} ({})\n", month, month.friendly_name()));
    output
}
