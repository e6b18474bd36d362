use crate::shared::infrastructure::backend::BackendError;
use crate::shared::web::html::page;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus::prelude::*;
use thiserror::Error;

/// Failures that end a page request with an error page.
#[derive(Debug, Error)]
pub enum WebError {
    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error("{0} not found")]
    NotFound(String),
}

impl WebError {
    fn status(&self) -> StatusCode {
        match self {
            WebError::NotFound(_) | WebError::Backend(BackendError::NotFound(_)) => {
                StatusCode::NOT_FOUND
            }
            WebError::Backend(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn message(&self) -> String {
        match self {
            WebError::NotFound(what) => format!("{what} could not be found."),
            WebError::Backend(BackendError::NotFound(_)) => {
                "The requested record no longer exists.".to_string()
            }
            WebError::Backend(_) => "The scheduling backend could not be reached.".to_string(),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status == StatusCode::BAD_GATEWAY {
            tracing::error!(error = %self, "backend call failed");
        } else {
            tracing::debug!(error = %self, "record not found");
        }
        let code = status.as_u16();
        let message = self.message();
        let body = rsx! {
            section { class: "card",
                div { class: "card-body",
                    h2 { "{code}" }
                    p { class: "alert", "{message}" }
                    p { a { class: "btn", href: "/employees", "Back" } }
                }
            }
        };
        (status, page("Error", None, body)).into_response()
    }
}
