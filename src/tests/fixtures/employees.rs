// Shared test fixtures for employees.

use crate::modules::employees::core::employee::{Employee, EmployeeInput};

pub struct EmployeeInputBuilder {
    inner: EmployeeInput,
}

impl Default for EmployeeInputBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EmployeeInputBuilder {
    pub fn new() -> Self {
        Self {
            inner: EmployeeInput {
                name: "Ada Lovelace".to_string(),
                role: "Analyst".to_string(),
            },
        }
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn role(mut self, v: impl Into<String>) -> Self {
        self.inner.role = v.into();
        self
    }

    pub fn build(self) -> EmployeeInput {
        self.inner
    }
}

pub fn make_employee(id: i64, name: &str, role: &str) -> Employee {
    Employee {
        id,
        name: name.to_string(),
        role: role.to_string(),
    }
}
