//! Unmetered informational endpoints: liveness, API index, and the
//! machine-readable schema document.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;

use super::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub success: bool,
    pub status: &'static str,
    pub database: bool,
    pub uptime_seconds: u64,
}

/// `GET /health`
pub async fn health(State(state): State<Arc<AppState>>) -> Response {
    let database = state.store().ping().await.is_ok();

    let status_code = if database {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status_code,
        Json(HealthResponse {
            success: database,
            status: if database { "alive" } else { "degraded" },
            database,
            uptime_seconds: state.start_time.elapsed().as_secs(),
        }),
    )
        .into_response()
}

/// `GET /` — API information.
pub async fn index(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let config = state.config().read().await;

    Json(json!({
        "name": "giftwise",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Gift recommendation API with pay-per-call access",
        "endpoints": [
            {
                "path": "POST /gifts/suggest",
                "price": format!("{} USDC", config.payment.suggest_price),
                "description": "Get gift recommendations from a social profile",
            },
            {
                "path": "GET /gifts/trending",
                "price": format!("{} USDC", config.payment.trending_price),
                "description": "Trending gifts and interests over the last 7 days",
            },
        ],
    }))
}

/// `GET /docs` — request/response schema for the metered endpoints.
pub async fn docs() -> Json<serde_json::Value> {
    Json(json!({
        "POST /gifts/suggest": {
            "input": {
                "bodyFields": {
                    "profileUrl": {
                        "type": "string",
                        "format": "uri",
                        "description": "Social media profile URL (Instagram, X, or TikTok)",
                        "required": true,
                    },
                    "platform": {
                        "type": "string",
                        "enum": ["instagram", "x", "tiktok"],
                        "description": "Social media platform",
                        "required": true,
                    },
                },
            },
            "output": {
                "success": { "type": "boolean" },
                "username": { "type": "string" },
                "profilePicUrl": { "type": "string", "format": "uri" },
                "gifts": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "title": { "type": "string" },
                            "price": { "type": "number" },
                            "image": { "type": "string", "format": "uri" },
                            "reason": { "type": "string" },
                            "asin": { "type": "string", "description": "Amazon ASIN" },
                            "productUrl": { "type": "string", "format": "uri" },
                            "checkoutUrl": { "type": "string", "format": "uri" },
                        },
                    },
                },
                "interests": { "type": "array", "items": { "type": "string" } },
                "themes": { "type": "array", "items": { "type": "string" } },
                "cached": { "type": "boolean" },
            },
        },
        "GET /gifts/trending": {
            "output": {
                "success": { "type": "boolean" },
                "trending": {
                    "gifts": { "type": "array" },
                    "interests": { "type": "array", "items": { "type": "string" } },
                    "period": { "type": "string" },
                    "sampleSize": { "type": "number" },
                },
                "cached": { "type": "boolean" },
            },
        },
    }))
}
