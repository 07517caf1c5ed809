//! JSON response envelopes
//!
//! Field names keep the casing the admin frontend reads (`Status`, `Error`).

use serde::{Deserialize, Serialize};

/// `{ "Status": bool, "message": "..." }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMessage {
    #[serde(rename = "Status")]
    pub status: bool,
    pub message: String,
}

impl StatusMessage {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: true,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            status: false,
            message: message.into(),
        }
    }
}

/// `{ "message": "..." }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `{ "Status": false, "Error": "..." }`, the generic server-failure body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryError {
    #[serde(rename = "Status")]
    pub status: bool,
    #[serde(rename = "Error")]
    pub error: String,
}

impl QueryError {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            status: false,
            error: error.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeCount {
    pub total_employees: i64,
}

/// Sum of all salaries; `null` when the table is empty
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TotalSalary {
    pub total_salary: Option<f64>,
}
