use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::constants::{cache, upstream};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,

    pub server: ServerConfig,

    pub upstream: UpstreamConfig,

    pub payment: PaymentConfig,

    pub cache: CacheConfig,

    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub database_path: String,

    pub log_level: String,

    /// Number of tokio worker threads (default: 2)
    /// Set to 0 to use the number of CPU cores
    pub worker_threads: usize,

    /// Maximum database connections (default: 5)
    pub max_db_connections: u32,

    /// Minimum database connections (default: 1)
    pub min_db_connections: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            database_path: "sqlite:data/giftwise.db".to_string(),
            log_level: "info".to_string(),
            worker_threads: 2,
            max_db_connections: 5,
            min_db_connections: 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,

    pub cors_allowed_origins: Vec<String>,

    /// Public base URL advertised in payment challenges and API docs.
    pub public_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            cors_allowed_origins: vec!["*".to_string()],
            public_url: "https://x-gifts.purch.xyz".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Purch gift hunter endpoint.
    pub api_url: String,

    /// Hard client-side timeout. Scraping plus AI analysis upstream takes
    /// 2-3 minutes; the payment layer allows up to 5.
    pub timeout_seconds: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            api_url: upstream::DEFAULT_PURCH_API_URL.to_string(),
            timeout_seconds: upstream::DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentConfig {
    /// When disabled, the gift routes are served without a payment challenge.
    pub enabled: bool,

    /// Receiving wallet address presented in the 402 challenge.
    pub wallet_address: String,

    pub network: String,

    pub suggest_price: String,

    pub trending_price: String,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            wallet_address: String::new(),
            network: "solana".to_string(),
            suggest_price: "$0.10".to_string(),
            trending_price: "$0.02".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Suggestion rows are considered fresh for this long.
    pub ttl_hours: i64,

    pub trending_window_days: i64,

    /// Cap on rows scanned per trending computation.
    pub trending_sample_limit: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_hours: cache::SUGGESTION_TTL_HOURS,
            trending_window_days: cache::TRENDING_WINDOW_DAYS,
            trending_sample_limit: cache::TRENDING_SAMPLE_LIMIT,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    pub metrics_enabled: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            metrics_enabled: true,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let paths = Self::config_paths();

        for path in &paths {
            if path.exists() {
                info!("Loading config from: {}", path.display());
                return Self::load_from_path(path);
            }
        }

        info!("No config file found, using defaults");
        Ok(Self::default())
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    fn config_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("config.toml")];

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("giftwise").join("config.toml"));
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".giftwise").join("config.toml"));
        }

        paths
    }

    pub fn validate(&self) -> Result<()> {
        if self.payment.enabled && self.payment.wallet_address.is_empty() {
            anyhow::bail!("Payment wallet address cannot be empty when payment is enabled");
        }

        if self.upstream.timeout_seconds == 0 {
            anyhow::bail!("Upstream timeout must be > 0 seconds");
        }

        if self.cache.ttl_hours <= 0 {
            anyhow::bail!("Cache TTL must be > 0 hours");
        }

        if self.cache.trending_window_days <= 0 || self.cache.trending_sample_limit == 0 {
            anyhow::bail!("Trending window and sample limit must be > 0");
        }

        Ok(())
    }
}
