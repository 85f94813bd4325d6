//! Request types for the transport roster API.
//!
//! This module defines the JSON request structure for the `/report`
//! endpoint.

use serde::{Deserialize, Serialize};

/// Request body for the `/report` endpoint.
///
/// The date is an opaque label echoed back in the report; it is neither
/// parsed nor validated. The employee list is the ordered attendance
/// selection and may contain duplicates or names missing from the roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRequest {
    /// The attendance date label.
    pub date: String,
    /// The names of the attending employees, in selection order.
    pub employees: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_report_request() {
        let json = r#"{
            "date": "2025-04-07",
            "employees": ["Alice", "Bob"]
        }"#;

        let request: ReportRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.date, "2025-04-07");
        assert_eq!(request.employees, vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_deserialize_empty_employee_list() {
        let json = r#"{"date": "2025-04-07", "employees": []}"#;

        let request: ReportRequest = serde_json::from_str(json).unwrap();
        assert!(request.employees.is_empty());
    }
}
