use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsItem {
    pub employee_id: i64,
    pub employee_name: String,
    pub total_shifts: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    #[serde(default)]
    pub items: Vec<AnalyticsItem>,
    #[serde(default)]
    pub total_shifts_all: u64,
}
