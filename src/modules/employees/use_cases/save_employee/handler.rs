use crate::modules::employees::core::employee::{Employee, EmployeeInput, EmployeeValidationError};
use crate::modules::employees::core::ports::EmployeeDirectory;
use crate::shared::infrastructure::backend::BackendError;
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Validation(#[from] EmployeeValidationError),

    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Raw add/edit form as posted by the browser.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
}

impl From<&Employee> for EmployeeForm {
    fn from(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone(),
            role: employee.role.clone(),
        }
    }
}

pub struct SaveEmployeeHandler {
    directory: Arc<dyn EmployeeDirectory>,
}

impl SaveEmployeeHandler {
    pub fn new(directory: Arc<dyn EmployeeDirectory>) -> Self {
        Self { directory }
    }

    pub async fn create(&self, form: &EmployeeForm) -> Result<Employee, ApplicationError> {
        let input = EmployeeInput::new(&form.name, &form.role)?;
        let employee = self.directory.create(&input).await?;
        tracing::info!(employee_id = employee.id, "employee created");
        Ok(employee)
    }

    pub async fn update(&self, id: i64, form: &EmployeeForm) -> Result<Employee, ApplicationError> {
        let input = EmployeeInput::new(&form.name, &form.role)?;
        let employee = self.directory.update(id, &input).await?;
        tracing::info!(employee_id = employee.id, "employee updated");
        Ok(employee)
    }
}
