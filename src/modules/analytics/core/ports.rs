use crate::modules::analytics::core::summary::AnalyticsSummary;
use crate::shared::core::primitives::OptionalDateRange;
use crate::shared::infrastructure::backend::BackendError;
use async_trait::async_trait;

#[async_trait]
pub trait AnalyticsQueries: Send + Sync {
    async fn summary(&self, range: OptionalDateRange) -> Result<AnalyticsSummary, BackendError>;
}
