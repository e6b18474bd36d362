use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::modules::analytics::use_cases::view_summary::inbound::http as summary_http;
use crate::modules::employees::use_cases::list_employees::inbound::http as list_employees_http;
use crate::modules::employees::use_cases::remove_employee::inbound::http as remove_employee_http;
use crate::modules::employees::use_cases::save_employee::inbound::http as save_employee_http;
use crate::modules::schedule::use_cases::remove_shift::inbound::http as remove_shift_http;
use crate::modules::schedule::use_cases::save_shift::inbound::http as save_shift_http;
use crate::modules::schedule::use_cases::view_calendar::inbound::http as calendar_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(list_employees_http::handle))
        .route(
            "/employees",
            get(list_employees_http::handle).post(save_employee_http::create),
        )
        .route("/employees/{id}", post(save_employee_http::update))
        .route("/employees/{id}/edit", get(save_employee_http::edit))
        .route("/employees/{id}/delete", post(remove_employee_http::handle))
        .route(
            "/schedule",
            get(calendar_http::handle).post(save_shift_http::create),
        )
        .route("/schedule/new", get(save_shift_http::new_form))
        .route("/schedule/{id}", post(save_shift_http::update))
        .route("/schedule/{id}/edit", get(save_shift_http::edit_form))
        .route("/schedule/{id}/delete", post(remove_shift_http::handle))
        .route("/summary", get(summary_http::handle))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
