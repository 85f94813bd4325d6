//! The roster store interface and its in-memory implementation.
//!
//! The aggregator never holds a store of its own; it borrows a
//! [`RosterStore`] handle for the duration of one report build. Absence of
//! a record is a normal outcome (`Ok(None)`); only a store fault is an
//! error.

use std::collections::BTreeMap;

use crate::error::{RosterError, RosterResult};
use crate::models::{Employee, Route, RouteCost};

/// Read-only query interface over the roster records.
///
/// All lookups are keyed, single-record fetches. Implementations backed by
/// an external store surface connectivity or corruption problems as
/// [`RosterError::StoreFault`]; a simple miss is `Ok(None)`.
pub trait RosterStore {
    /// Looks up an employee by name.
    fn find_employee_by_name(&self, name: &str) -> RosterResult<Option<&Employee>>;

    /// Looks up a route by its code.
    fn find_route_by_code(&self, code: &str) -> RosterResult<Option<&Route>>;

    /// Looks up a route cost by its route code.
    fn find_route_cost_by_code(&self, code: &str) -> RosterResult<Option<&RouteCost>>;

    /// Returns all employees, ordered by name.
    fn employees(&self) -> RosterResult<Vec<&Employee>>;

    /// Returns all routes, ordered by route code.
    fn routes(&self) -> RosterResult<Vec<&Route>>;

    /// Returns all route costs, ordered by route code.
    fn route_costs(&self) -> RosterResult<Vec<&RouteCost>>;
}

/// In-memory roster store.
///
/// Records are held in ordered maps so full scans iterate
/// deterministically. Mutation is only available on the concrete type;
/// the aggregator sees the store through the read-only [`RosterStore`]
/// trait.
///
/// # Example
///
/// ```
/// use transport_roster::store::{MemoryStore, RosterStore};
/// use transport_roster::models::{Employee, Route};
///
/// let mut store = MemoryStore::new();
/// store.insert_route(Route {
///     route_code: "R1".to_string(),
///     route_name: "Line A".to_string(),
///     vehicle_type: "Minibus".to_string(),
///     contractor_name: "City Transit".to_string(),
///     supervisor_name: "Nadia".to_string(),
///     route_stations: "StationX,StationY".to_string(),
/// });
///
/// let route = store.find_route_by_code("R1").unwrap();
/// assert!(route.is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    employees: BTreeMap<String, Employee>,
    routes: BTreeMap<String, Route>,
    route_costs: BTreeMap<String, RouteCost>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces an employee, keyed by name.
    pub fn insert_employee(&mut self, employee: Employee) {
        self.employees.insert(employee.name.clone(), employee);
    }

    /// Inserts or replaces a route, keyed by route code.
    pub fn insert_route(&mut self, route: Route) {
        self.routes.insert(route.route_code.clone(), route);
    }

    /// Inserts or replaces a route cost, keyed by route code.
    ///
    /// Every route cost must reference an existing route; that referential
    /// invariant is enforced here, at the store boundary, not by the
    /// aggregator.
    pub fn insert_route_cost(&mut self, cost: RouteCost) -> RosterResult<()> {
        if !self.routes.contains_key(&cost.route_code) {
            return Err(RosterError::UnknownRouteCode {
                code: cost.route_code.clone(),
            });
        }
        self.route_costs.insert(cost.route_code.clone(), cost);
        Ok(())
    }

    /// Returns the number of employee records.
    pub fn employee_count(&self) -> usize {
        self.employees.len()
    }

    /// Returns the number of route records.
    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// Returns the number of route cost records.
    pub fn route_cost_count(&self) -> usize {
        self.route_costs.len()
    }
}

impl RosterStore for MemoryStore {
    fn find_employee_by_name(&self, name: &str) -> RosterResult<Option<&Employee>> {
        Ok(self.employees.get(name))
    }

    fn find_route_by_code(&self, code: &str) -> RosterResult<Option<&Route>> {
        Ok(self.routes.get(code))
    }

    fn find_route_cost_by_code(&self, code: &str) -> RosterResult<Option<&RouteCost>> {
        Ok(self.route_costs.get(code))
    }

    fn employees(&self) -> RosterResult<Vec<&Employee>> {
        Ok(self.employees.values().collect())
    }

    fn routes(&self) -> RosterResult<Vec<&Route>> {
        Ok(self.routes.values().collect())
    }

    fn route_costs(&self) -> RosterResult<Vec<&RouteCost>> {
        Ok(self.route_costs.values().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn test_employee(name: &str) -> Employee {
        Employee {
            name: name.to_string(),
            department: "HR".to_string(),
            station: "StationX".to_string(),
            route_code: Some("R1".to_string()),
            notes: None,
        }
    }

    fn test_route(code: &str) -> Route {
        Route {
            route_code: code.to_string(),
            route_name: format!("Line {}", code),
            vehicle_type: "Minibus".to_string(),
            contractor_name: "City Transit".to_string(),
            supervisor_name: "Nadia".to_string(),
            route_stations: "StationX,StationY".to_string(),
        }
    }

    fn test_cost(code: &str) -> RouteCost {
        RouteCost {
            route_code: code.to_string(),
            vehicle_capacity: 14,
            cost_5_days: dec("500.0"),
            cost_4_days: dec("420.0"),
            cost_3_days: dec("330.0"),
        }
    }

    #[test]
    fn test_find_employee_by_name_hit() {
        let mut store = MemoryStore::new();
        store.insert_employee(test_employee("Alice"));

        let found = store.find_employee_by_name("Alice").unwrap();
        assert_eq!(found.map(|e| e.name.as_str()), Some("Alice"));
    }

    #[test]
    fn test_find_employee_by_name_miss_is_ok_none() {
        let store = MemoryStore::new();
        let found = store.find_employee_by_name("Nobody").unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn test_find_route_by_code() {
        let mut store = MemoryStore::new();
        store.insert_route(test_route("R1"));

        assert!(store.find_route_by_code("R1").unwrap().is_some());
        assert!(store.find_route_by_code("R2").unwrap().is_none());
    }

    #[test]
    fn test_insert_route_cost_requires_existing_route() {
        let mut store = MemoryStore::new();

        let result = store.insert_route_cost(test_cost("R1"));
        assert!(result.is_err());
        match result.unwrap_err() {
            RosterError::UnknownRouteCode { code } => assert_eq!(code, "R1"),
            other => panic!("Expected UnknownRouteCode, got {:?}", other),
        }
    }

    #[test]
    fn test_insert_route_cost_after_route() {
        let mut store = MemoryStore::new();
        store.insert_route(test_route("R1"));

        store.insert_route_cost(test_cost("R1")).unwrap();
        let cost = store.find_route_cost_by_code("R1").unwrap().unwrap();
        assert_eq!(cost.cost_5_days, dec("500.0"));
    }

    #[test]
    fn test_insert_employee_replaces_by_name() {
        let mut store = MemoryStore::new();
        store.insert_employee(test_employee("Alice"));

        let mut updated = test_employee("Alice");
        updated.department = "Finance".to_string();
        store.insert_employee(updated);

        assert_eq!(store.employee_count(), 1);
        let found = store.find_employee_by_name("Alice").unwrap().unwrap();
        assert_eq!(found.department, "Finance");
    }

    #[test]
    fn test_full_scans_are_ordered_by_key() {
        let mut store = MemoryStore::new();
        store.insert_route(test_route("R2"));
        store.insert_route(test_route("R1"));
        store.insert_employee(test_employee("Bob"));
        store.insert_employee(test_employee("Alice"));

        let route_codes: Vec<&str> = store
            .routes()
            .unwrap()
            .iter()
            .map(|r| r.route_code.as_str())
            .collect();
        assert_eq!(route_codes, vec!["R1", "R2"]);

        let names: Vec<&str> = store
            .employees()
            .unwrap()
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, vec!["Alice", "Bob"]);
    }
}
