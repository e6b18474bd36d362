use crate::modules::schedule::core::calendar::{CalendarPosition, ViewMode};
use crate::modules::schedule::core::ports::ShiftSchedule;
use crate::modules::schedule::core::shift::{Shift, ShiftInput, ShiftValidationError};
use crate::shared::core::primitives::{OptionalDateRange, format_iso};
use crate::shared::infrastructure::backend::BackendError;
use chrono::NaiveDate;
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Validation(#[from] ShiftValidationError),

    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Shift editor form. `view` and `at` remember the calendar position to
/// return to once the shift is saved.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShiftForm {
    #[serde(default)]
    pub employee_id: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub shift: String,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub view: Option<ViewMode>,
    #[serde(default)]
    pub at: Option<String>,
}

impl ShiftForm {
    pub fn blank(date: NaiveDate) -> Self {
        Self {
            date: format_iso(date),
            ..Self::default()
        }
    }

    pub fn position(&self, today: NaiveDate) -> CalendarPosition {
        CalendarPosition::resolve(self.view, self.at.as_deref(), today)
    }
}

impl From<&Shift> for ShiftForm {
    fn from(shift: &Shift) -> Self {
        Self {
            employee_id: shift.employee_id.to_string(),
            date: format_iso(shift.date),
            shift: shift.kind().map(|kind| kind.label().to_string()).unwrap_or_default(),
            note: shift.note.clone().unwrap_or_default(),
            view: None,
            at: None,
        }
    }
}

pub struct SaveShiftHandler {
    schedule: Arc<dyn ShiftSchedule>,
}

impl SaveShiftHandler {
    pub fn new(schedule: Arc<dyn ShiftSchedule>) -> Self {
        Self { schedule }
    }

    pub async fn create(&self, form: &ShiftForm) -> Result<Shift, ApplicationError> {
        let input = ShiftInput::parse(&form.employee_id, &form.date, &form.shift, &form.note)?;
        let shift = self.schedule.create(&input).await?;
        tracing::info!(shift_id = shift.id, date = %shift.date, "shift scheduled");
        Ok(shift)
    }

    pub async fn update(&self, id: i64, form: &ShiftForm) -> Result<Shift, ApplicationError> {
        let input = ShiftInput::parse(&form.employee_id, &form.date, &form.shift, &form.note)?;
        let shift = self.schedule.update(id, &input).await?;
        tracing::info!(shift_id = shift.id, date = %shift.date, "shift updated");
        Ok(shift)
    }
}

/// The backend has no single-shift endpoint, so the shift is looked up in the
/// list for its date (or the whole list when the date is unknown).
pub async fn find_shift(
    schedule: &dyn ShiftSchedule,
    id: i64,
    on: Option<NaiveDate>,
) -> Result<Option<Shift>, BackendError> {
    let range = on
        .map(OptionalDateRange::single_day)
        .unwrap_or_else(OptionalDateRange::unbounded);
    let shifts = schedule.list(range).await?;
    Ok(shifts.into_iter().find(|shift| shift.id == id))
}
