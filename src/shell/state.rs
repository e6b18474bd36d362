use crate::modules::analytics::core::ports::AnalyticsQueries;
use crate::modules::employees::core::ports::EmployeeDirectory;
use crate::modules::schedule::core::ports::ShiftSchedule;
use crate::shared::infrastructure::backend::BackendClient;
use crate::shared::infrastructure::backend::in_memory::InMemoryBackend;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub employees: Arc<dyn EmployeeDirectory>,
    pub schedule: Arc<dyn ShiftSchedule>,
    pub analytics: Arc<dyn AnalyticsQueries>,
}

impl AppState {
    pub fn over_http(client: BackendClient) -> Self {
        let client = Arc::new(client);
        Self {
            employees: client.clone(),
            schedule: client.clone(),
            analytics: client,
        }
    }

    pub fn in_memory(backend: Arc<InMemoryBackend>) -> Self {
        Self {
            employees: backend.clone(),
            schedule: backend.clone(),
            analytics: backend,
        }
    }
}
