//! Employee model.
//!
//! This module defines the Employee struct representing a worker who is
//! assigned to a transport route and boards at a named station.

use serde::{Deserialize, Serialize};

/// Represents an employee on the transport roster.
///
/// The employee's `name` is the lookup key used by the roster store; it is
/// unique within a report run. The `route_code` is a foreign key into the
/// routes table and may be absent for employees who arrange their own
/// transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// The employee's name, unique within a report run.
    pub name: String,
    /// The department the employee belongs to.
    pub department: String,
    /// The station where the employee boards their route.
    pub station: String,
    /// The code of the route assigned to the employee, if any.
    #[serde(default)]
    pub route_code: Option<String>,
    /// Free-text notes about the employee.
    #[serde(default)]
    pub notes: Option<String>,
}

impl Employee {
    /// Returns the assigned route code, treating a blank code as unassigned.
    ///
    /// # Examples
    ///
    /// ```
    /// use transport_roster::models::Employee;
    ///
    /// let employee = Employee {
    ///     name: "Alice".to_string(),
    ///     department: "HR".to_string(),
    ///     station: "StationX".to_string(),
    ///     route_code: Some("R1".to_string()),
    ///     notes: None,
    /// };
    /// assert_eq!(employee.assigned_route(), Some("R1"));
    /// ```
    pub fn assigned_route(&self) -> Option<&str> {
        self.route_code.as_deref().filter(|code| !code.is_empty())
    }
}
