use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::info;

use crate::models::gift::{Platform, ProfileData};

/// One gift record as the Purch backend reports it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchGift {
    pub title: String,
    pub price: f64,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purch_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_link: Option<String>,
}

/// Full analysis result from the Purch backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchGiftResponse {
    pub success: bool,
    #[serde(default)]
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_pic_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_data: Option<ProfileData>,
    #[serde(default)]
    pub gifts: Vec<PurchGift>,
}

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error(
        "Request timeout after {} minutes. The profile may have too much content to analyze.",
        .0 / 60
    )]
    Timeout(u64),

    #[error("Purch backend returned {status}: {reason}")]
    Upstream { status: u16, reason: String },

    #[error("Purch request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// The external service that performs the profile scraping and AI-driven
/// gift analysis. Behind a trait so the workflow can run against a fake
/// in tests instead of a process-wide client singleton.
#[async_trait]
pub trait GiftProvider: Send + Sync {
    async fn fetch_suggestions(
        &self,
        profile_url: &str,
        platform: Platform,
    ) -> Result<PurchGiftResponse, ProviderError>;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PurchRequest<'a> {
    profile_url: &'a str,
    platform: Platform,
}

#[derive(Clone)]
pub struct PurchClient {
    client: Client,
    api_url: String,
    timeout_seconds: u64,
}

impl PurchClient {
    pub fn new(api_url: impl Into<String>, timeout_seconds: u64) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("giftwise/", env!("CARGO_PKG_VERSION")))
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(Self {
            client,
            api_url: api_url.into(),
            timeout_seconds,
        })
    }
}

#[async_trait]
impl GiftProvider for PurchClient {
    /// Single POST to the Purch backend. Scraping plus AI analysis takes
    /// 2-3 minutes upstream, so the timeout is generous. One attempt only;
    /// callers surface the failure rather than retrying.
    async fn fetch_suggestions(
        &self,
        profile_url: &str,
        platform: Platform,
    ) -> Result<PurchGiftResponse, ProviderError> {
        info!(%platform, "Calling Purch backend, this may take a few minutes");

        let response = self
            .client
            .post(&self.api_url)
            .timeout(Duration::from_secs(self.timeout_seconds))
            .json(&PurchRequest {
                profile_url,
                platform,
            })
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProviderError::Timeout(self.timeout_seconds)
                } else {
                    ProviderError::Http(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Upstream {
                status: status.as_u16(),
                reason: status
                    .canonical_reason()
                    .unwrap_or("Unknown Error")
                    .to_string(),
            });
        }

        let data: PurchGiftResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout(self.timeout_seconds)
            } else {
                ProviderError::Http(e)
            }
        })?;

        info!(gifts = data.gifts.len(), "Received gift suggestions");
        Ok(data)
    }
}
