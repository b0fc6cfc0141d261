//! The two metered endpoints. Validation happens before the workflow runs;
//! everything past validation surfaces as the flat success or failure
//! envelope.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use std::sync::Arc;

use super::{ApiError, AppState};
use super::types::{SuggestRequest, SuggestResponse, TrendingResponse};

/// `POST /gifts/suggest`
pub async fn suggest(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SuggestRequest>, JsonRejection>,
) -> Result<Json<SuggestResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::validation(e.body_text()))?;

    let profile_url = url::Url::parse(&request.profile_url)
        .map_err(|_| ApiError::validation("profileUrl must be a valid URL"))?;

    let outcome = state
        .suggestions()
        .suggest(profile_url.as_str(), request.platform)
        .await?;

    Ok(Json(SuggestResponse::from(outcome)))
}

/// `GET /gifts/trending`
pub async fn trending(
    State(state): State<Arc<AppState>>,
) -> Result<Json<TrendingResponse>, ApiError> {
    let summary = state.trending().compute().await?;

    Ok(Json(TrendingResponse::new(summary)))
}
