//! Report output models.
//!
//! This module contains the [`ReportModel`] type and its associated
//! structures that capture the full output of a report aggregation:
//! per-route summaries, department attendance counts, the total cost, and
//! unresolved-employee diagnostics.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The reason an input employee name could not be fully resolved.
///
/// An unresolved employee contributes nothing to route buckets, station
/// counts, or the cost total. Department attendance still counts the
/// employee for every reason except [`UnresolvedReason::EmployeeNotFound`],
/// since department resolution only needs the Employee record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnresolvedReason {
    /// The name did not match any Employee record.
    EmployeeNotFound,
    /// The Employee record carries no route code.
    NoRouteAssigned,
    /// The employee's route code did not match any Route record.
    RouteNotFound,
    /// The route exists but has no RouteCost record.
    CostNotFound,
}

/// A diagnostic entry for an input name that could not be mapped to a
/// complete Employee→Route→RouteCost chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unresolved {
    /// The input name, exactly as supplied.
    pub name: String,
    /// Why resolution stopped.
    pub reason: UnresolvedReason,
}

/// The per-route accumulation bucket of a report.
///
/// One summary exists per distinct route with at least one resolved rider.
/// The route's cost is charged once per summary, never per rider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSummary {
    /// The code of the summarized route.
    pub route_code: String,
    /// The display name of the route.
    pub route_name: String,
    /// The type of vehicle serving the route.
    pub vehicle_type: String,
    /// The name of the contractor operating the vehicle.
    pub contractor_name: String,
    /// The name of the route supervisor.
    pub supervisor_name: String,
    /// The route's declared stations, in original order.
    pub stations: Vec<String>,
    /// Rider count per boarding station. Keys are the stations riders
    /// actually boarded at, which need not be declared stations.
    pub station_counts: BTreeMap<String, u32>,
    /// Names of the riders on this route, in boarding order.
    pub riders: Vec<String>,
    /// The passenger capacity of the vehicle.
    pub vehicle_capacity: u32,
    /// The route's flat 5-day cost, charged once for the whole vehicle.
    pub cost: Decimal,
}

impl RouteSummary {
    /// Returns the total number of riders on this route.
    pub fn rider_count(&self) -> usize {
        self.riders.len()
    }

    /// Returns true if the route has more riders than the vehicle holds.
    pub fn over_capacity(&self) -> bool {
        self.riders.len() > self.vehicle_capacity as usize
    }

    /// Returns the boarding stations that are not declared on the route,
    /// in the deterministic key order of `station_counts`.
    pub fn undeclared_stations(&self) -> Vec<&str> {
        self.station_counts
            .keys()
            .filter(|station| !self.stations.iter().any(|s| s == *station))
            .map(String::as_str)
            .collect()
    }
}

/// The complete output of a report aggregation.
///
/// Deterministic given identical store contents and input order: route
/// summaries appear in first-encounter order and all count maps iterate in
/// key order.
///
/// # Example
///
/// ```
/// use transport_roster::models::ReportModel;
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
/// assert_eq!(report.resolved_count(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportModel {
    /// The attendance date label, echoed back unmodified.
    pub date: String,
    /// Route summaries, ordered by first encounter in the input list.
    pub routes: Vec<RouteSummary>,
    /// Attendance count per department, over resolved employees.
    pub department_counts: BTreeMap<String, u32>,
    /// The sum of each distinct route's 5-day cost, counted once.
    pub total_cost: Decimal,
    /// Input names that could not be fully resolved, in input order.
    pub unresolved: Vec<Unresolved>,
}

impl ReportModel {
    /// Returns the number of resolved employees, which equals the sum of
    /// the department attendance counts.
    pub fn resolved_count(&self) -> u32 {
        self.department_counts.values().sum()
    }
}
