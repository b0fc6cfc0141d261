use std::sync::Arc;
use tokio::sync::RwLock;

use crate::clients::purch::{GiftProvider, PurchClient};
use crate::config::Config;
use crate::db::Store;
use crate::services::{SuggestionService, TrendingService};

/// Explicitly constructed dependency graph, shared behind an Arc. Nothing
/// here is a process-wide singleton; tests build one with an in-memory
/// database and a fake provider.
#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<RwLock<Config>>,

    pub store: Store,

    pub suggestions: Arc<SuggestionService>,

    pub trending: Arc<TrendingService>,
}

impl SharedState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let provider = Arc::new(PurchClient::new(
            config.upstream.api_url.clone(),
            config.upstream.timeout_seconds,
        )?) as Arc<dyn GiftProvider>;

        Self::with_provider(config, provider).await
    }

    pub async fn with_provider(
        config: Config,
        provider: Arc<dyn GiftProvider>,
    ) -> anyhow::Result<Self> {
        let store = Store::with_pool_options(
            &config.general.database_path,
            config.general.max_db_connections,
            config.general.min_db_connections,
        )
        .await?;

        let suggestions = Arc::new(SuggestionService::new(
            store.clone(),
            provider,
            config.cache.ttl_hours,
        ));

        let trending = Arc::new(TrendingService::new(
            store.clone(),
            config.cache.trending_window_days,
            config.cache.trending_sample_limit,
        ));

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            store,
            suggestions,
            trending,
        })
    }

    pub async fn config(&self) -> Config {
        self.config.read().await.clone()
    }
}
