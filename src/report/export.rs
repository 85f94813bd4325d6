//! Spreadsheet export of a report.
//!
//! Flattens a [`ReportModel`] into one row per (route, declared station)
//! pair plus a trailing total-only row, and writes the rows as CSV. Like
//! the text renderer, this only reshapes a finished model and never
//! recomputes aggregation.

use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{RosterError, RosterResult};
use crate::models::ReportModel;

/// Marker used in the `Route` column of the trailing total row.
pub const TOTAL_ROW_LABEL: &str = "Total";

/// One row of the spreadsheet export.
///
/// Station rows carry the per-station rider count and the route's cost;
/// the trailing total row carries only the label and the grand total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRow {
    /// The route code, or [`TOTAL_ROW_LABEL`] on the trailing row.
    #[serde(rename = "Route")]
    pub route: String,
    /// The vehicle type; empty on the trailing row.
    #[serde(rename = "Vehicle Type")]
    pub vehicle_type: String,
    /// The declared station; empty on the trailing row.
    #[serde(rename = "Station")]
    pub station: String,
    /// The rider count at this station; absent on the trailing row.
    #[serde(rename = "Passenger Count")]
    pub passenger_count: Option<u32>,
    /// The route's 5-day cost, or the grand total on the trailing row.
    #[serde(rename = "Cost (5 Days)")]
    pub cost_5_days: Decimal,
}

/// Flattens a report into spreadsheet rows.
///
/// Produces one row per (route, declared station) pair, stations with no
/// riders included with a count of zero, followed by a single total-only
/// row. Riders who boarded outside the declared station list are visible
/// in the model's station counts and in the text rendering, not in this
/// grid.
pub fn export_rows(report: &ReportModel) -> Vec<ExportRow> {
    let mut rows = Vec::new();

    for summary in &report.routes {
        for station in &summary.stations {
            let count = summary.station_counts.get(station).copied().unwrap_or(0);
            rows.push(ExportRow {
                route: summary.route_code.clone(),
                vehicle_type: summary.vehicle_type.clone(),
                station: station.clone(),
                passenger_count: Some(count),
                cost_5_days: summary.cost,
            });
        }
    }

    rows.push(ExportRow {
        route: TOTAL_ROW_LABEL.to_string(),
        vehicle_type: String::new(),
        station: String::new(),
        passenger_count: None,
        cost_5_days: report.total_cost,
    });

    rows
}

/// Writes a report as a CSV file with headers to the given path.
///
/// # Errors
///
/// Returns [`RosterError::ExportError`] if the file cannot be created or
/// written.
pub fn write_csv<P: AsRef<Path>>(path: P, report: &ReportModel) -> RosterResult<()> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let mut writer = csv::Writer::from_path(path).map_err(|e| RosterError::ExportError {
        path: path_str.clone(),
        message: e.to_string(),
    })?;

    let rows = export_rows(report);
    let row_count = rows.len();
    for row in rows {
        writer.serialize(row).map_err(|e| RosterError::ExportError {
            path: path_str.clone(),
            message: e.to_string(),
        })?;
    }

    writer.flush().map_err(|e| RosterError::ExportError {
        path: path_str.clone(),
        message: e.to_string(),
    })?;

    info!(path = %path_str, rows = row_count, "Report exported");
    Ok(())
}
