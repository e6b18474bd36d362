use axum::{
    Form,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;

use crate::modules::schedule::core::calendar::{CalendarPosition, ViewMode};
use crate::modules::schedule::use_cases::save_shift::handler::{
    ApplicationError, SaveShiftHandler, ShiftForm, find_shift,
};
use crate::modules::schedule::views::{self, ShiftEditor};
use crate::shared::core::primitives::parse_optional_date;
use crate::shared::web::errors::WebError;
use crate::shell::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct EditorParams {
    pub on: Option<String>,
    pub view: Option<ViewMode>,
    pub at: Option<String>,
}

impl EditorParams {
    fn position(&self, today: NaiveDate) -> CalendarPosition {
        CalendarPosition::resolve(self.view, self.at.as_deref(), today)
    }

    fn on(&self) -> Option<NaiveDate> {
        self.on
            .as_deref()
            .and_then(|value| parse_optional_date(value).ok().flatten())
    }
}

pub async fn new_form(
    State(state): State<AppState>,
    Query(params): Query<EditorParams>,
) -> Result<Html<String>, WebError> {
    let position = params.position(Local::now().date_naive());
    let date = params.on().unwrap_or(position.reference);
    let employees = state.employees.list().await?;
    let form = ShiftForm::blank(date);
    Ok(views::editor_page(&ShiftEditor {
        editing: None,
        position,
        form: &form,
        employees: &employees,
        error: None,
    }))
}

pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(params): Query<EditorParams>,
) -> Result<Html<String>, WebError> {
    let position = params.position(Local::now().date_naive());
    let (employees, shift) = tokio::try_join!(
        state.employees.list(),
        find_shift(&*state.schedule, id, params.on())
    )?;
    let shift = shift.ok_or_else(|| WebError::NotFound(format!("Shift {id}")))?;
    let form = ShiftForm::from(&shift);
    Ok(views::editor_page(&ShiftEditor {
        editing: Some(id),
        position,
        form: &form,
        employees: &employees,
        error: None,
    }))
}

pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<ShiftForm>,
) -> Result<Response, WebError> {
    let handler = SaveShiftHandler::new(state.schedule.clone());
    let result = handler.create(&form).await;
    respond(&state, None, &form, result.map(|_| ())).await
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<ShiftForm>,
) -> Result<Response, WebError> {
    let handler = SaveShiftHandler::new(state.schedule.clone());
    let result = handler.update(id, &form).await;
    respond(&state, Some(id), &form, result.map(|_| ())).await
}

async fn respond(
    state: &AppState,
    editing: Option<i64>,
    form: &ShiftForm,
    result: Result<(), ApplicationError>,
) -> Result<Response, WebError> {
    let position = form.position(Local::now().date_naive());
    match result {
        Ok(()) => Ok(Redirect::to(&views::calendar_link(position)).into_response()),
        Err(ApplicationError::Validation(err)) => {
            let employees = state.employees.list().await?;
            let message = err.to_string();
            let page = views::editor_page(&ShiftEditor {
                editing,
                position,
                form,
                employees: &employees,
                error: Some(&message),
            });
            Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response())
        }
        Err(ApplicationError::Backend(err)) => Err(err.into()),
    }
}
