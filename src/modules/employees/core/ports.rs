use crate::modules::employees::core::employee::{Employee, EmployeeInput};
use crate::shared::infrastructure::backend::BackendError;
use async_trait::async_trait;

#[async_trait]
pub trait EmployeeDirectory: Send + Sync {
    async fn list(&self) -> Result<Vec<Employee>, BackendError>;
    async fn create(&self, input: &EmployeeInput) -> Result<Employee, BackendError>;
    async fn update(&self, id: i64, input: &EmployeeInput) -> Result<Employee, BackendError>;
    async fn remove(&self, id: i64) -> Result<(), BackendError>;
}
