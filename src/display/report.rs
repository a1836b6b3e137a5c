//! Weekly report display formatting

use crate::models::WeeklyReport;

/// Format a list of weekly reports as a table
pub fn format_report_list(reports: &[WeeklyReport]) -> String {
    if reports.is_empty() {
        return "No weekly reports found.".to_string();
    }

    let project_width = reports
        .iter()
        .map(|r| r.project.len())
        .max()
        .unwrap_or(7)
        .max(7);

    let zone_width = reports
        .iter()
        .map(|r| r.zone.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<8}  {:<7}  {:<project_width$}  {:<zone_width$}  {:>10}  {:>4}  {:>4}  {:>4}\n",
        "ID",
        "Week",
        "Month",
        "Project",
        "Zone",
        "Man-hours",
        "LTI",
        "REC",
        "NM",
        project_width = project_width,
        zone_width = zone_width,
    ));
    output.push_str(&format!(
        "{:-<12}  {:-<8}  {:-<7}  {:-<project_width$}  {:-<zone_width$}  {:->10}  {:->4}  {:->4}  {:->4}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        "",
        "",
        "",
        project_width = project_width,
        zone_width = zone_width,
    ));

    for report in reports {
        let week = report
            .week_identifier()
            .map(|id| id.to_string())
            .unwrap_or_else(|_| format!("{}-W{:02}?", report.year, report.week));
        let month = report
            .month_key()
            .map(|m| m.to_string())
            .unwrap_or_else(|_| "-".to_string());

        output.push_str(&format!(
            "{:<12}  {:<8}  {:<7}  {:<project_width$}  {:<zone_width$}  {:>10.1}  {:>4}  {:>4}  {:>4}\n",
            report.id.to_string(),
            week,
            month,
            report.project,
            report.zone,
            report.metrics.man_hours,
            report.metrics.lost_time_injuries,
            report.metrics.recordable_injuries,
            report.metrics.near_misses,
            project_width = project_width,
            zone_width = zone_width,
        ));
    }

    output.push_str(&format!("\n{} report(s)", reports.len()));
    output
}

/// Format a single weekly report with all metrics
pub fn format_report_details(report: &WeeklyReport, date_format: &str) -> String {
    let m = &report.metrics;
    let mut output = String::new();

    output.push_str(&format!("Weekly report {}\n", report.id));
    output.push_str(&format!("  Project:   {}\n", report.project));
    if !report.zone.is_empty() {
        output.push_str(&format!("  Zone:      {}\n", report.zone));
    }
    output.push_str(&format!("  Week:      {} of {}\n", report.week, report.year));
    if let Ok((start, end)) = report.date_range() {
        output.push_str(&format!(
            "  Dates:     {} - {}\n",
            start.format(date_format),
            end.format(date_format)
        ));
    }
    if let Ok(month) = report.month_key() {
        output.push_str(&format!("  Month:     {}\n", month));
    }
    output.push_str(&format!("  Man-hours: {:.1}\n", m.man_hours));
    output.push_str(&format!(
        "  LTI: {}  Recordable: {}  First aid: {}  Near misses: {}\n",
        m.lost_time_injuries, m.recordable_injuries, m.first_aid_cases, m.near_misses
    ));
    output.push_str(&format!(
        "  Inspections: {}  Trainings: {}\n",
        m.inspections, m.trainings
    ));
    output.push_str(&format!(
        "  LTIFR: {:.2}  TRIR: {:.2}\n",
        m.ltifr(),
        m.trir()
    ));
    output
}
