use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::shared::web::errors::WebError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect, WebError> {
    state.employees.remove(id).await?;
    tracing::info!(employee_id = id, "employee removed");
    Ok(Redirect::to("/employees"))
}

#[cfg(test)]
mod remove_employee_http_inbound_tests {
    use axum::{Router, http::StatusCode, routing::post};
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::modules::employees::core::ports::EmployeeDirectory;
    use crate::shared::infrastructure::backend::in_memory::InMemoryBackend;
    use crate::shell::state::AppState;
    use crate::tests::fixtures::employees::EmployeeInputBuilder;
    use crate::tests::fixtures::http::{form_post, location};

    use super::handle;

    fn app(backend: Arc<InMemoryBackend>) -> Router {
        Router::new()
            .route("/employees/{id}/delete", post(handle))
            .with_state(AppState::in_memory(backend))
    }

    #[tokio::test]
    async fn it_should_delete_and_redirect_to_the_list() {
        let backend = Arc::new(InMemoryBackend::new());
        EmployeeDirectory::create(&*backend, &EmployeeInputBuilder::new().build())
            .await
            .unwrap();

        let response = app(backend.clone())
            .oneshot(form_post("/employees/1/delete", ""))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/employees");
        assert!(EmployeeDirectory::list(&*backend).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn it_should_return_404_for_an_unknown_employee() {
        let response = app(Arc::new(InMemoryBackend::new()))
            .oneshot(form_post("/employees/3/delete", ""))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
