use axum::{
    extract::{Query, State},
    response::Html,
};
use chrono::Local;
use serde::Deserialize;

use crate::modules::schedule::core::calendar::{CalendarPosition, ViewMode};
use crate::modules::schedule::use_cases::view_calendar::handler::load_calendar;
use crate::modules::schedule::views;
use crate::shared::web::errors::WebError;
use crate::shell::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct CalendarParams {
    pub view: Option<ViewMode>,
    pub at: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<CalendarParams>,
) -> Result<Html<String>, WebError> {
    let today = Local::now().date_naive();
    let position = CalendarPosition::resolve(params.view, params.at.as_deref(), today);
    let calendar = load_calendar(&*state.employees, &*state.schedule, position, today).await?;
    Ok(views::calendar_page(&calendar))
}
