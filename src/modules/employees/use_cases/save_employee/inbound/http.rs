use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::modules::employees::core::employee::find_employee;
use crate::modules::employees::use_cases::save_employee::handler::{
    ApplicationError, EmployeeForm, SaveEmployeeHandler,
};
use crate::modules::employees::views;
use crate::shared::web::errors::WebError;
use crate::shell::state::AppState;

pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<EmployeeForm>,
) -> Result<Response, WebError> {
    let handler = SaveEmployeeHandler::new(state.employees.clone());
    match handler.create(&form).await {
        Ok(_) => Ok(Redirect::to("/employees").into_response()),
        Err(ApplicationError::Validation(err)) => {
            let employees = state.employees.list().await?;
            let page = views::list_page(&employees, &form, Some(&err.to_string()));
            Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response())
        }
        Err(ApplicationError::Backend(err)) => Err(err.into()),
    }
}

pub async fn edit(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, WebError> {
    let employees = state.employees.list().await?;
    let employee =
        find_employee(&employees, id).ok_or_else(|| WebError::NotFound(format!("Employee {id}")))?;
    Ok(views::edit_page(id, &EmployeeForm::from(employee), None))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<EmployeeForm>,
) -> Result<Response, WebError> {
    let handler = SaveEmployeeHandler::new(state.employees.clone());
    match handler.update(id, &form).await {
        Ok(_) => Ok(Redirect::to("/employees").into_response()),
        Err(ApplicationError::Validation(err)) => {
            let page = views::edit_page(id, &form, Some(&err.to_string()));
            Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response())
        }
        Err(ApplicationError::Backend(err)) => Err(err.into()),
    }
}
