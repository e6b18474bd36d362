use crate::modules::employees::core::employee::{Employee, EmployeeInput};
use crate::modules::employees::core::ports::EmployeeDirectory;
use crate::shared::infrastructure::backend::{BackendClient, BackendError};

#[async_trait::async_trait]
impl EmployeeDirectory for BackendClient {
    async fn list(&self) -> Result<Vec<Employee>, BackendError> {
        self.get_json("/employees", &[]).await
    }

    async fn create(&self, input: &EmployeeInput) -> Result<Employee, BackendError> {
        self.post_json("/employees", input).await
    }

    async fn update(&self, id: i64, input: &EmployeeInput) -> Result<Employee, BackendError> {
        self.put_json(&format!("/employees/{id}"), input).await
    }

    async fn remove(&self, id: i64) -> Result<(), BackendError> {
        self.delete(&format!("/employees/{id}")).await
    }
}
