//! Report aggregation, the core of the engine.
//!
//! [`build_report`] turns an attendance date label and an ordered list of
//! employee names into a [`ReportModel`]: riders grouped into per-route
//! buckets, rider counts tallied per boarding station, department
//! attendance counted, and each distinct route's 5-day cost charged to the
//! total exactly once. The function performs no I/O of its own; it reads
//! through an injected [`RosterStore`] handle and is deterministic given
//! identical store contents and input order.

use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;
use tracing::warn;

use crate::error::RosterResult;
use crate::models::{ReportModel, RouteSummary, Unresolved, UnresolvedReason};
use crate::store::RosterStore;

/// Builds the attendance/cost report for one day.
///
/// Each input name is processed in order:
/// 1. The name is resolved to an Employee record; a miss is recorded as an
///    unresolved entry and the run continues.
/// 2. A resolved employee counts toward their department's attendance,
///    whether or not their route chain resolves.
/// 3. The employee's route code is resolved to a Route and RouteCost pair;
///    any missing link is recorded as an unresolved entry and skipped for
///    cost and grouping.
/// 4. A fully resolved employee joins the bucket for their route. The
///    bucket is created on first sight of the route code, and the route's
///    5-day cost is added to the total at that moment only; cost is per
///    vehicle, never per rider.
/// 5. The bucket's rider count for the employee's boarding station is
///    incremented, whether or not the station is declared on the route.
///
/// Duplicate input names are processed per occurrence.
///
/// # Errors
///
/// Only a store-access fault is an error; missing records degrade to
/// entries in [`ReportModel::unresolved`].
///
/// # Example
///
/// ```
/// use transport_roster::report::build_report;
/// use transport_roster::store::MemoryStore;
///
/// let store = MemoryStore::new();
/// let names = vec!["Alice".to_string()];
/// let report = build_report(&store, "2025-04-07", &names).unwrap();
///
/// assert_eq!(report.date, "2025-04-07");
/// assert_eq!(report.unresolved.len(), 1);
/// ```
pub fn build_report<S: RosterStore>(
    store: &S,
    date: &str,
    employee_names: &[String],
) -> RosterResult<ReportModel> {
    let mut routes: Vec<RouteSummary> = Vec::new();
    // route code -> index into `routes`, preserving first-encounter order
    let mut bucket_index: HashMap<String, usize> = HashMap::new();
    let mut department_counts: BTreeMap<String, u32> = BTreeMap::new();
    let mut total_cost = Decimal::ZERO;
    let mut unresolved: Vec<Unresolved> = Vec::new();

    for name in employee_names {
        let Some(employee) = store.find_employee_by_name(name)? else {
            warn!(employee = %name, "Employee not found in roster");
            unresolved.push(Unresolved {
                name: name.clone(),
                reason: UnresolvedReason::EmployeeNotFound,
            });
            continue;
        };

        // Department attendance only needs the Employee record.
        *department_counts
            .entry(employee.department.clone())
            .or_insert(0) += 1;

        let Some(route_code) = employee.assigned_route() else {
            warn!(employee = %name, "Employee has no route assigned");
            unresolved.push(Unresolved {
                name: name.clone(),
                reason: UnresolvedReason::NoRouteAssigned,
            });
            continue;
        };

        let Some(route) = store.find_route_by_code(route_code)? else {
            warn!(employee = %name, route_code, "Route not found for employee");
            unresolved.push(Unresolved {
                name: name.clone(),
                reason: UnresolvedReason::RouteNotFound,
            });
            continue;
        };

        let Some(cost) = store.find_route_cost_by_code(route_code)? else {
            warn!(employee = %name, route_code, "Route cost not found for employee");
            unresolved.push(Unresolved {
                name: name.clone(),
                reason: UnresolvedReason::CostNotFound,
            });
            continue;
        };

        let index = match bucket_index.get(route_code) {
            Some(&index) => index,
            None => {
                // First rider on this route: create the bucket and charge
                // the vehicle's cost once.
                total_cost += cost.cost_5_days;
                routes.push(RouteSummary {
                    route_code: route.route_code.clone(),
                    route_name: route.route_name.clone(),
                    vehicle_type: route.vehicle_type.clone(),
                    contractor_name: route.contractor_name.clone(),
                    supervisor_name: route.supervisor_name.clone(),
                    stations: route.stations(),
                    station_counts: BTreeMap::new(),
                    riders: Vec::new(),
                    vehicle_capacity: cost.vehicle_capacity,
                    cost: cost.cost_5_days,
                });
                let index = routes.len() - 1;
                bucket_index.insert(route.route_code.clone(), index);
                index
            }
        };

        let bucket = &mut routes[index];
        *bucket
            .station_counts
            .entry(employee.station.clone())
            .or_insert(0) += 1;
        bucket.riders.push(employee.name.clone());
    }

    Ok(ReportModel {
        date: date.to_string(),
        routes,
        department_counts,
        total_cost,
        unresolved,
    })
}
