use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::analytics::views::{self, SummaryFilter};
use crate::shared::core::primitives::OptionalDateRange;
use crate::shared::web::errors::WebError;
use crate::shell::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct SummaryParams {
    pub start: Option<String>,
    pub end: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<SummaryParams>,
) -> Result<Response, WebError> {
    let filter = SummaryFilter {
        start: params.start.as_deref().unwrap_or_default(),
        end: params.end.as_deref().unwrap_or_default(),
    };
    let range = match OptionalDateRange::parse(params.start.as_deref(), params.end.as_deref()) {
        Ok(range) => range,
        Err(err) => {
            let message = err.to_string();
            let page = views::summary_page(filter, None, Some(&message));
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response());
        }
    };
    let summary = state.analytics.summary(range).await?;
    tracing::debug!(rows = summary.items.len(), "summary loaded");
    Ok(views::summary_page(filter, Some(&summary), None).into_response())
}
