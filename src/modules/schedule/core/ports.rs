use crate::modules::schedule::core::shift::{Shift, ShiftInput};
use crate::shared::core::primitives::OptionalDateRange;
use crate::shared::infrastructure::backend::BackendError;
use async_trait::async_trait;

#[async_trait]
pub trait ShiftSchedule: Send + Sync {
    /// Shifts whose date falls inside `range`; both bounds inclusive.
    async fn list(&self, range: OptionalDateRange) -> Result<Vec<Shift>, BackendError>;
    async fn create(&self, input: &ShiftInput) -> Result<Shift, BackendError>;
    async fn update(&self, id: i64, input: &ShiftInput) -> Result<Shift, BackendError>;
    async fn remove(&self, id: i64) -> Result<(), BackendError>;
}
