use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub role: String,
}

/// Payload sent to the backend when creating or updating an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeInput {
    pub name: String,
    pub role: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EmployeeValidationError {
    #[error("Name is required.")]
    MissingName,

    #[error("Role is required.")]
    MissingRole,
}

impl EmployeeInput {
    pub fn new(name: &str, role: &str) -> Result<Self, EmployeeValidationError> {
        let name = name.trim();
        let role = role.trim();
        if name.is_empty() {
            return Err(EmployeeValidationError::MissingName);
        }
        if role.is_empty() {
            return Err(EmployeeValidationError::MissingRole);
        }
        Ok(Self {
            name: name.to_string(),
            role: role.to_string(),
        })
    }
}

pub fn find_employee(employees: &[Employee], id: i64) -> Option<&Employee> {
    employees.iter().find(|employee| employee.id == id)
}
