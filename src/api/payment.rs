//! x402-style payment challenge boundary.
//!
//! The gift routes are pay-per-call. Requests without payment proof get a
//! 402 carrying the payment requirements for the route; requests that
//! present an `X-Payment` header pass through to the handler. Settlement
//! and verification live in the external facilitator, not here.

use axum::{
    Json,
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

use super::AppState;
use crate::config::PaymentConfig;

pub const PAYMENT_HEADER: &str = "x-payment";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequirements {
    pub scheme: String,
    pub network: String,
    pub price: String,
    pub pay_to: String,
    pub resource: String,
    pub description: String,
    pub mime_type: String,
    pub max_timeout_seconds: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentChallenge {
    pub x402_version: u8,
    pub error: String,
    pub accepts: Vec<PaymentRequirements>,
}

fn requirements_for(payment: &PaymentConfig, public_url: &str, path: &str) -> PaymentRequirements {
    let (price, description) = if path == "/gifts/trending" {
        (
            payment.trending_price.clone(),
            "Frequency-ranked trending gifts and interests over the last 7 days.".to_string(),
        )
    } else {
        (
            payment.suggest_price.clone(),
            "Get personalized gift recommendations based on social media profile analysis. \
             Analyzes Instagram, X, or TikTok profiles to suggest perfect gifts."
                .to_string(),
        )
    };

    PaymentRequirements {
        scheme: "exact".to_string(),
        network: payment.network.clone(),
        price,
        pay_to: payment.wallet_address.clone(),
        resource: format!("{}{}", public_url.trim_end_matches('/'), path),
        description,
        mime_type: "application/json".to_string(),
        max_timeout_seconds: 300,
    }
}

pub async fn require_payment(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    let (enabled, payment, public_url) = {
        let config = state.config().read().await;
        (
            config.payment.enabled,
            config.payment.clone(),
            config.server.public_url.clone(),
        )
    };

    if !enabled {
        return next.run(request).await;
    }

    if request.headers().contains_key(PAYMENT_HEADER) {
        // Proof is settled downstream by the facilitator.
        return next.run(request).await;
    }

    let path = request.uri().path().to_string();
    debug!(path, "Rejecting unpaid request with payment challenge");

    let challenge = PaymentChallenge {
        x402_version: 1,
        error: "X-PAYMENT header is required".to_string(),
        accepts: vec![requirements_for(&payment, &public_url, &path)],
    };

    (StatusCode::PAYMENT_REQUIRED, Json(challenge)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requirements_pick_route_price() {
        let payment = PaymentConfig {
            enabled: true,
            wallet_address: "wallet123".to_string(),
            ..PaymentConfig::default()
        };

        let suggest = requirements_for(&payment, "https://api.example", "/gifts/suggest");
        assert_eq!(suggest.price, "$0.10");
        assert_eq!(suggest.resource, "https://api.example/gifts/suggest");

        let trending = requirements_for(&payment, "https://api.example/", "/gifts/trending");
        assert_eq!(trending.price, "$0.02");
        assert_eq!(trending.resource, "https://api.example/gifts/trending");
    }

    #[test]
    fn test_challenge_serialization() {
        let payment = PaymentConfig::default();
        let challenge = PaymentChallenge {
            x402_version: 1,
            error: "X-PAYMENT header is required".to_string(),
            accepts: vec![requirements_for(&payment, "https://api.example", "/gifts/suggest")],
        };

        let json = serde_json::to_value(&challenge).unwrap();
        assert_eq!(json["x402Version"], 1);
        assert_eq!(json["accepts"][0]["network"], "solana");
        assert_eq!(json["accepts"][0]["maxTimeoutSeconds"], 300);
    }
}
