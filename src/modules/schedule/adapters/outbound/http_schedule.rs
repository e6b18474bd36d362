use crate::modules::schedule::core::ports::ShiftSchedule;
use crate::modules::schedule::core::shift::{Shift, ShiftInput};
use crate::shared::core::primitives::OptionalDateRange;
use crate::shared::infrastructure::backend::{BackendClient, BackendError};

#[async_trait::async_trait]
impl ShiftSchedule for BackendClient {
    async fn list(&self, range: OptionalDateRange) -> Result<Vec<Shift>, BackendError> {
        self.get_json("/schedule", &range.query_pairs()).await
    }

    async fn create(&self, input: &ShiftInput) -> Result<Shift, BackendError> {
        self.post_json("/schedule", input).await
    }

    async fn update(&self, id: i64, input: &ShiftInput) -> Result<Shift, BackendError> {
        self.put_json(&format!("/schedule/{id}"), input).await
    }

    async fn remove(&self, id: i64) -> Result<(), BackendError> {
        self.delete(&format!("/schedule/{id}")).await
    }
}
