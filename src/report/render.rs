//! Human-readable rendering of a report.
//!
//! Produces the multi-line text block shown to the person running the
//! report. The renderer only formats a finished [`ReportModel`]; it never
//! recomputes any aggregation, so the text view and the spreadsheet view
//! cannot diverge.

use crate::models::{ReportModel, UnresolvedReason};

/// Renders a report as a multi-line text block.
///
/// The block lists the date, per-department attendance counts, per-route
/// details (declared stations with rider counts, riders, capacity, cost),
/// unresolved names, and the grand total.
///
/// # Example
///
/// ```
/// use transport_roster::models::ReportModel;
/// use transport_roster::report::render_text;
/// use rust_decimal::Decimal;
/// use std::collections::BTreeMap;
///
/// let report = ReportModel {
///     date: "2025-04-07".to_string(),
///     routes: vec![],
///     department_counts: BTreeMap::new(),
///     total_cost: Decimal::ZERO,
///     unresolved: vec![],
/// };
/// let text = render_text(&report);
/// assert!(text.starts_with("Daily Transport Report for 2025-04-07"));
/// ```
pub fn render_text(report: &ReportModel) -> String {
    let mut out = String::new();

    out.push_str(&format!("Daily Transport Report for {}\n", report.date));
    out.push_str("================================\n\n");

    out.push_str("Attendance by Department:\n");
    if report.department_counts.is_empty() {
        out.push_str("  (none)\n");
    }
    for (department, count) in &report.department_counts {
        out.push_str(&format!("  {}: {}\n", department, count));
    }

    for summary in &report.routes {
        out.push('\n');
        out.push_str(&format!(
            "Route: {} ({})\n",
            summary.route_name, summary.route_code
        ));
        out.push_str(&format!("  Vehicle Type: {}\n", summary.vehicle_type));
        out.push_str(&format!("  Contractor: {}\n", summary.contractor_name));
        out.push_str(&format!("  Supervisor: {}\n", summary.supervisor_name));
        out.push_str("  Stations:\n");
        for station in &summary.stations {
            let count = summary.station_counts.get(station).copied().unwrap_or(0);
            out.push_str(&format!("    - {}: {} riders\n", station, count));
        }
        let undeclared = summary.undeclared_stations();
        if !undeclared.is_empty() {
            out.push_str("  Boarded outside declared stations:\n");
            for station in undeclared {
                let count = summary.station_counts.get(station).copied().unwrap_or(0);
                out.push_str(&format!("    - {}: {} riders\n", station, count));
            }
        }
        out.push_str(&format!(
            "  Riders ({}/{}): {}{}\n",
            summary.rider_count(),
            summary.vehicle_capacity,
            summary.riders.join(", "),
            if summary.over_capacity() {
                " [OVER CAPACITY]"
            } else {
                ""
            }
        ));
        out.push_str(&format!("  Cost (5 Days): {}\n", summary.cost));
    }

    if !report.unresolved.is_empty() {
        out.push_str("\nUnresolved:\n");
        for entry in &report.unresolved {
            out.push_str(&format!(
                "  - {} ({})\n",
                entry.name,
                reason_label(&entry.reason)
            ));
        }
    }

    out.push_str(&format!("\nTotal Daily Cost: {}\n", report.total_cost));
    out
}

fn reason_label(reason: &UnresolvedReason) -> &'static str {
    match reason {
        UnresolvedReason::EmployeeNotFound => "employee not found",
        UnresolvedReason::NoRouteAssigned => "no route assigned",
        UnresolvedReason::RouteNotFound => "route not found",
        UnresolvedReason::CostNotFound => "route cost not found",
    }
}
