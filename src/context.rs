//! Application context built once at startup and shared with consumers.

use crate::bo::ClassRegistry;
use crate::config::Config;
use crate::metrics::LookupMetrics;
use crate::seed;
use crate::store::{MemoryStore, PgStore, TranslationStore};
use anyhow::Result;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::info;

/// Everything request handlers need, passed explicitly instead of read from
/// globals.
#[derive(Clone)]
pub struct AppContext {
    pub registry: &'static ClassRegistry,
    pub store: Arc<dyn TranslationStore>,
    pub metrics: &'static LookupMetrics,
    pub api_key: Option<String>,
    pub started_at: DateTime<Utc>,
}

impl AppContext {
    /// Build the context from configuration: register classes, open the
    /// store and load seed translations.
    pub async fn init(config: &Config) -> Result<Self> {
        let registry = ClassRegistry::global();
        info!("Registered classes: {}", registry.names().join(", "));

        let store: Arc<dyn TranslationStore> = match &config.database_url {
            Some(url) => {
                info!("Using PostgreSQL translation store");
                Arc::new(PgStore::connect(url, config.database_max_connections).await?)
            }
            None => {
                info!("DATABASE_URL not set, using in-memory translation store");
                Arc::new(MemoryStore::new())
            }
        };

        if let Some(dir) = &config.seed_dir {
            seed::seed_store(store.as_ref(), dir).await?;
        }

        if config.api_key.is_none() {
            info!("API_KEY not set, write routes are disabled");
        }

        Ok(Self::new(store, config.api_key.clone()))
    }

    /// Build a context over an existing store, using the global registry and
    /// metrics.
    pub fn new(store: Arc<dyn TranslationStore>, api_key: Option<String>) -> Self {
        Self {
            registry: ClassRegistry::global(),
            store,
            metrics: LookupMetrics::global(),
            api_key,
            started_at: Utc::now(),
        }
    }
}
