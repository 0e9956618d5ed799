//! Store manager that dispatches to the configured provider.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::info;

use anteroom_core::config::store::StoreConfig;
use anteroom_core::error::AppError;
use anteroom_core::result::AppResult;
use anteroom_core::traits::counters::CounterBackend;

/// Store manager that wraps the configured counter backend.
///
/// The backend is selected at construction time based on configuration.
#[derive(Debug, Clone)]
pub struct StoreManager {
    /// The inner counter backend.
    inner: Arc<dyn CounterBackend>,
}

impl StoreManager {
    /// Create a new store manager from configuration.
    pub async fn new(config: &StoreConfig) -> AppResult<Self> {
        let inner: Arc<dyn CounterBackend> = match config.provider.as_str() {
            #[cfg(feature = "redis-backend")]
            "redis" => {
                info!("Initializing Redis counter backend");
                let client = crate::redis::RedisClient::connect(&config.redis).await?;
                Arc::new(crate::redis::RedisCounterBackend::new(client))
            }
            #[cfg(feature = "memory")]
            "memory" => {
                info!("Initializing in-memory counter backend");
                Arc::new(crate::memory::MemoryCounterBackend::new())
            }
            other => {
                return Err(AppError::configuration(format!(
                    "Unknown store provider: '{other}'. Supported: memory, redis"
                )));
            }
        };

        Ok(Self { inner })
    }

    /// Create a store manager from an existing backend (for testing).
    pub fn from_backend(backend: Arc<dyn CounterBackend>) -> Self {
        Self { inner: backend }
    }

    /// Get a reference to the inner backend.
    pub fn backend(&self) -> &dyn CounterBackend {
        self.inner.as_ref()
    }
}

#[async_trait]
impl CounterBackend for StoreManager {
    async fn get(&self, key: &str) -> AppResult<Option<i64>> {
        self.inner.get(key).await
    }

    async fn incr_by(&self, key: &str, amount: i64) -> AppResult<i64> {
        self.inner.incr_by(key, amount).await
    }

    async fn expire(&self, key: &str, ttl: Duration) -> AppResult<bool> {
        self.inner.expire(key, ttl).await
    }

    async fn health_check(&self) -> AppResult<bool> {
        self.inner.health_check().await
    }
}
