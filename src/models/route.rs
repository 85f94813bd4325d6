//! Route and route cost models.
//!
//! A route describes a transport line and its ordered station list; a route
//! cost carries the vehicle capacity and the flat daily operating cost for
//! each weekly attendance tier.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The separator between station names in [`Route::route_stations`].
pub const STATION_SEPARATOR: char = ',';

/// Represents a transport route (line) serving a set of stations.
///
/// # Example
///
/// ```
/// use transport_roster::models::Route;
///
/// let route = Route {
///     route_code: "R1".to_string(),
///     route_name: "Line A".to_string(),
///     vehicle_type: "Minibus".to_string(),
///     contractor_name: "City Transit".to_string(),
///     supervisor_name: "Nadia".to_string(),
///     route_stations: "StationX,StationY".to_string(),
/// };
/// assert_eq!(route.stations(), vec!["StationX", "StationY"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    /// Unique identifier for the route.
    pub route_code: String,
    /// The display name of the route.
    pub route_name: String,
    /// The type of vehicle serving the route.
    pub vehicle_type: String,
    /// The name of the contractor operating the vehicle.
    pub contractor_name: String,
    /// The name of the route supervisor.
    pub supervisor_name: String,
    /// The ordered station list, delimited by [`STATION_SEPARATOR`].
    pub route_stations: String,
}

impl Route {
    /// Splits the delimited station list into ordered station names.
    ///
    /// Segments are taken verbatim: names are not trimmed and empty
    /// segments are not filtered, so a repeated or trailing separator
    /// surfaces as a literal empty stop. An empty stop in a report is a
    /// data-entry signal, not something the engine hides.
    pub fn stations(&self) -> Vec<String> {
        self.route_stations
            .split(STATION_SEPARATOR)
            .map(str::to_string)
            .collect()
    }
}

/// The flat operating costs and capacity for one route's vehicle.
///
/// One-to-one with a [`Route`] via `route_code`. The costs are per vehicle
/// per day, keyed by weekly attendance pattern; only the 5-day cost is
/// consumed by the report aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteCost {
    /// The code of the route this cost belongs to.
    pub route_code: String,
    /// The passenger capacity of the vehicle.
    pub vehicle_capacity: u32,
    /// The flat cost for a 5-day weekly attendance pattern.
    pub cost_5_days: Decimal,
    /// The flat cost for a 4-day weekly attendance pattern.
    pub cost_4_days: Decimal,
    /// The flat cost for a 3-day weekly attendance pattern.
    pub cost_3_days: Decimal,
}
