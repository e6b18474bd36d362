// In memory stand-in for the scheduling backend.
//
// Purpose
// - Run the admin pages without a backend (BACKEND_MODE=memory) and exercise
//   handlers in tests.
//
// Responsibilities
// - Keep employees and shifts in memory with backend-style sequential ids.
// - Answer unknown ids with NotFound, like the backend does.
// - Aggregate shift counts per employee for the analytics page.

use crate::modules::analytics::core::ports::AnalyticsQueries;
use crate::modules::analytics::core::summary::{AnalyticsItem, AnalyticsSummary};
use crate::modules::employees::core::employee::{Employee, EmployeeInput};
use crate::modules::employees::core::ports::EmployeeDirectory;
use crate::modules::schedule::core::ports::ShiftSchedule;
use crate::modules::schedule::core::shift::{Shift, ShiftInput};
use crate::shared::core::primitives::OptionalDateRange;
use crate::shared::infrastructure::backend::BackendError;
use tokio::sync::RwLock;

#[derive(Default)]
struct Tables {
    employees: Vec<Employee>,
    shifts: Vec<Shift>,
    last_employee_id: i64,
    last_shift_id: i64,
}

#[derive(Default)]
pub struct InMemoryBackend {
    tables: RwLock<Tables>,
    is_offline: bool,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), BackendError> {
        if self.is_offline {
            return Err(BackendError::Unavailable("In-memory backend offline".into()));
        }
        Ok(())
    }

    pub async fn shift_count(&self) -> usize {
        self.tables.read().await.shifts.len()
    }
}

fn shift_from_input(id: i64, input: &ShiftInput) -> Shift {
    Shift {
        id,
        employee_id: input.employee_id,
        date: input.date,
        shift: input.shift.label().to_string(),
        note: input.note.clone(),
    }
}

#[async_trait::async_trait]
impl EmployeeDirectory for InMemoryBackend {
    async fn list(&self) -> Result<Vec<Employee>, BackendError> {
        self.ensure_online()?;
        Ok(self.tables.read().await.employees.clone())
    }

    async fn create(&self, input: &EmployeeInput) -> Result<Employee, BackendError> {
        self.ensure_online()?;
        let mut tables = self.tables.write().await;
        tables.last_employee_id += 1;
        let employee = Employee {
            id: tables.last_employee_id,
            name: input.name.clone(),
            role: input.role.clone(),
        };
        tables.employees.push(employee.clone());
        Ok(employee)
    }

    async fn update(&self, id: i64, input: &EmployeeInput) -> Result<Employee, BackendError> {
        self.ensure_online()?;
        let mut tables = self.tables.write().await;
        let existing = tables
            .employees
            .iter_mut()
            .find(|employee| employee.id == id)
            .ok_or_else(|| BackendError::NotFound(format!("/employees/{id}")))?;
        existing.name = input.name.clone();
        existing.role = input.role.clone();
        Ok(existing.clone())
    }

    async fn remove(&self, id: i64) -> Result<(), BackendError> {
        self.ensure_online()?;
        let mut tables = self.tables.write().await;
        let before = tables.employees.len();
        tables.employees.retain(|employee| employee.id != id);
        if tables.employees.len() == before {
            return Err(BackendError::NotFound(format!("/employees/{id}")));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ShiftSchedule for InMemoryBackend {
    async fn list(&self, range: OptionalDateRange) -> Result<Vec<Shift>, BackendError> {
        self.ensure_online()?;
        let tables = self.tables.read().await;
        Ok(tables
            .shifts
            .iter()
            .filter(|shift| range.contains(shift.date))
            .cloned()
            .collect())
    }

    async fn create(&self, input: &ShiftInput) -> Result<Shift, BackendError> {
        self.ensure_online()?;
        let mut tables = self.tables.write().await;
        tables.last_shift_id += 1;
        let shift = shift_from_input(tables.last_shift_id, input);
        tables.shifts.push(shift.clone());
        Ok(shift)
    }

    async fn update(&self, id: i64, input: &ShiftInput) -> Result<Shift, BackendError> {
        self.ensure_online()?;
        let mut tables = self.tables.write().await;
        let existing = tables
            .shifts
            .iter_mut()
            .find(|shift| shift.id == id)
            .ok_or_else(|| BackendError::NotFound(format!("/schedule/{id}")))?;
        *existing = shift_from_input(id, input);
        Ok(existing.clone())
    }

    async fn remove(&self, id: i64) -> Result<(), BackendError> {
        self.ensure_online()?;
        let mut tables = self.tables.write().await;
        let before = tables.shifts.len();
        tables.shifts.retain(|shift| shift.id != id);
        if tables.shifts.len() == before {
            return Err(BackendError::NotFound(format!("/schedule/{id}")));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl AnalyticsQueries for InMemoryBackend {
    async fn summary(&self, range: OptionalDateRange) -> Result<AnalyticsSummary, BackendError> {
        self.ensure_online()?;
        let tables = self.tables.read().await;
        let mut items: Vec<AnalyticsItem> = tables
            .employees
            .iter()
            .map(|employee| AnalyticsItem {
                employee_id: employee.id,
                employee_name: employee.name.clone(),
                total_shifts: tables
                    .shifts
                    .iter()
                    .filter(|shift| shift.employee_id == employee.id && range.contains(shift.date))
                    .count() as u64,
            })
            .collect();
        items.sort_by_key(|item| item.employee_id);
        let total_shifts_all = items.iter().map(|item| item.total_shifts).sum();
        Ok(AnalyticsSummary {
            items,
            total_shifts_all,
        })
    }
}
