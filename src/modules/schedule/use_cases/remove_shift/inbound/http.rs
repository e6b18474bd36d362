use axum::{
    Form,
    extract::{Path, State},
    response::Redirect,
};
use chrono::Local;

use crate::modules::schedule::core::calendar::CalendarPosition;
use crate::modules::schedule::use_cases::view_calendar::inbound::http::CalendarParams;
use crate::modules::schedule::views;
use crate::shared::web::errors::WebError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(params): Form<CalendarParams>,
) -> Result<Redirect, WebError> {
    state.schedule.remove(id).await?;
    tracing::info!(shift_id = id, "shift removed");
    let position =
        CalendarPosition::resolve(params.view, params.at.as_deref(), Local::now().date_naive());
    Ok(Redirect::to(&views::calendar_link(position)))
}
