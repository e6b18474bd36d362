use axum::{extract::State, response::Html};

use crate::modules::employees::use_cases::save_employee::handler::EmployeeForm;
use crate::modules::employees::views;
use crate::shared::web::errors::WebError;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> Result<Html<String>, WebError> {
    let employees = state.employees.list().await?;
    Ok(views::list_page(&employees, &EmployeeForm::default(), None))
}

#[cfg(test)]
mod list_employees_http_inbound_tests {
    use axum::{Router, http::StatusCode, routing::get};
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::modules::employees::core::ports::EmployeeDirectory;
    use crate::shared::infrastructure::backend::in_memory::InMemoryBackend;
    use crate::shell::state::AppState;
    use crate::tests::fixtures::employees::EmployeeInputBuilder;
    use crate::tests::fixtures::http::{body_document, body_text, get as get_request};

    use super::handle;

    fn app(backend: Arc<InMemoryBackend>) -> Router {
        Router::new()
            .route("/employees", get(handle))
            .with_state(AppState::in_memory(backend))
    }

    #[tokio::test]
    async fn it_should_render_the_empty_state() {
        let response = app(Arc::new(InMemoryBackend::new()))
            .oneshot(get_request("/employees"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("No employees yet"));
    }

    #[tokio::test]
    async fn it_should_list_employees_with_escaped_names() {
        let backend = Arc::new(InMemoryBackend::new());
        EmployeeDirectory::create(
            &*backend,
            &EmployeeInputBuilder::new().name("<Ada>").role("Analyst").build(),
        )
        .await
        .unwrap();

        let response = app(backend)
            .oneshot(get_request("/employees"))
            .await
            .unwrap();

        let document = body_document(response).await;
        assert_eq!(document.texts("tbody td")[1..3], ["<Ada>", "Analyst"]);
        assert_eq!(document.count("tbody ada"), 0);
        assert_eq!(document.attr("tbody a.btn", "href"), "/employees/1/edit");
        assert_eq!(document.attr("tbody form", "action"), "/employees/1/delete");
    }

    #[tokio::test]
    async fn it_should_return_502_when_the_backend_is_offline() {
        let mut backend = InMemoryBackend::new();
        backend.toggle_offline();

        let response = app(Arc::new(backend))
            .oneshot(get_request("/employees"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert!(
            body_text(response)
                .await
                .contains("The scheduling backend could not be reached.")
        );
    }
}
