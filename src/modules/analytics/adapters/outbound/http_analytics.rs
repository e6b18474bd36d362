use crate::modules::analytics::core::ports::AnalyticsQueries;
use crate::modules::analytics::core::summary::AnalyticsSummary;
use crate::shared::core::primitives::OptionalDateRange;
use crate::shared::infrastructure::backend::{BackendClient, BackendError};

#[async_trait::async_trait]
impl AnalyticsQueries for BackendClient {
    async fn summary(&self, range: OptionalDateRange) -> Result<AnalyticsSummary, BackendError> {
        self.get_json("/analytics", &range.query_pairs()).await
    }
}
