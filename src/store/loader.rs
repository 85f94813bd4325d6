//! Roster loading functionality.
//!
//! This module provides the [`RosterLoader`] type for bulk-loading a
//! roster directory of YAML files into a validated [`MemoryStore`].

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{RosterError, RosterResult};
use crate::models::{Employee, Route, RouteCost};

use super::memory::MemoryStore;

/// `employees.yaml` file structure.
#[derive(Debug, Deserialize)]
struct EmployeesFile {
    employees: Vec<Employee>,
}

/// `routes.yaml` file structure.
#[derive(Debug, Deserialize)]
struct RoutesFile {
    routes: Vec<Route>,
}

/// `route_costs.yaml` file structure.
#[derive(Debug, Deserialize)]
struct RouteCostsFile {
    route_costs: Vec<RouteCost>,
}

/// Bulk-loads roster data from a directory of YAML files.
///
/// # Directory Structure
///
/// The roster directory should have the following structure:
/// ```text
/// data/roster/
/// ├── employees.yaml    # Employee records
/// ├── routes.yaml       # Route records
/// └── route_costs.yaml  # Per-route vehicle capacity and costs
/// ```
///
/// Routes are loaded before costs so the RouteCost→Route reference is
/// checked on every cost record.
///
/// # Example
///
/// ```no_run
/// use transport_roster::store::{RosterLoader, RosterStore};
///
/// let store = RosterLoader::load("./data/roster").unwrap();
/// println!("Loaded {} employees", store.employee_count());
/// ```
#[derive(Debug)]
pub struct RosterLoader;

impl RosterLoader {
    /// Loads a roster directory into a [`MemoryStore`].
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the roster directory (e.g., "./data/roster")
    ///
    /// # Returns
    ///
    /// Returns the populated store on success, or an error if:
    /// - Any of the three files is missing (`RosterFileNotFound`)
    /// - Any file contains invalid YAML (`RosterParseError`)
    /// - A route cost references a route that does not exist
    ///   (`UnknownRouteCode`)
    pub fn load<P: AsRef<Path>>(path: P) -> RosterResult<MemoryStore> {
        let path = path.as_ref();

        let routes_file: RoutesFile = Self::load_yaml(&path.join("routes.yaml"))?;
        let costs_file: RouteCostsFile = Self::load_yaml(&path.join("route_costs.yaml"))?;
        let employees_file: EmployeesFile = Self::load_yaml(&path.join("employees.yaml"))?;

        let mut store = MemoryStore::new();
        for route in routes_file.routes {
            store.insert_route(route);
        }
        for cost in costs_file.route_costs {
            store.insert_route_cost(cost)?;
        }
        for employee in employees_file.employees {
            store.insert_employee(employee);
        }

        tracing::info!(
            employees = store.employee_count(),
            routes = store.route_count(),
            route_costs = store.route_cost_count(),
            "Roster loaded"
        );

        Ok(store)
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> RosterResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| RosterError::RosterFileNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| RosterError::RosterParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}
