use crate::modules::employees::core::employee::Employee;
use crate::modules::employees::core::ports::EmployeeDirectory;
use crate::modules::schedule::core::calendar::{
    CalendarDay, CalendarPosition, PlacedShift, build_grid, ordered_list,
};
use crate::modules::schedule::core::ports::ShiftSchedule;
use crate::shared::infrastructure::backend::BackendError;
use chrono::NaiveDate;

/// Everything the schedule page renders.
#[derive(Debug, Clone)]
pub struct CalendarPage {
    pub position: CalendarPosition,
    pub today: NaiveDate,
    pub days: Vec<CalendarDay>,
    pub listing: Vec<PlacedShift>,
    pub employees: Vec<Employee>,
}

pub async fn load_calendar(
    employees: &dyn EmployeeDirectory,
    schedule: &dyn ShiftSchedule,
    position: CalendarPosition,
    today: NaiveDate,
) -> Result<CalendarPage, BackendError> {
    let range = position.visible_range();
    let (employees, shifts) = tokio::try_join!(employees.list(), schedule.list(range.into()))?;
    tracing::debug!(
        start = %range.start,
        end = %range.end,
        shifts = shifts.len(),
        "calendar range loaded"
    );
    Ok(CalendarPage {
        position,
        today,
        days: build_grid(position.mode, position.reference, today, &shifts, &employees),
        listing: ordered_list(&shifts, &employees),
        employees,
    })
}
