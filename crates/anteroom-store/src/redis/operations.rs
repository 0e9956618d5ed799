//! Redis counter backend implementation.
//!
//! Redis guarantees single-key INCRBY is atomic, which is the only
//! coordination primitive the queue relies on. Any Redis failure maps to
//! `ErrorKind::StoreUnavailable` and propagates: a failed read must never
//! degrade into an admit-everyone or deny-everyone decision.

use std::time::Duration;

use async_trait::async_trait;
use redis::AsyncCommands;

use anteroom_core::error::{AppError, ErrorKind};
use anteroom_core::result::AppResult;
use anteroom_core::traits::counters::CounterBackend;

use super::client::RedisClient;

/// Redis-backed counter backend.
#[derive(Debug, Clone)]
pub struct RedisCounterBackend {
    /// Redis client.
    client: RedisClient,
}

impl RedisCounterBackend {
    /// Create a new Redis counter backend.
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }

    /// Map a Redis error to an AppError.
    fn map_err(e: redis::RedisError) -> AppError {
        AppError::with_source(
            ErrorKind::StoreUnavailable,
            format!("Redis error: {e}"),
            e,
        )
    }
}

#[async_trait]
impl CounterBackend for RedisCounterBackend {
    async fn get(&self, key: &str) -> AppResult<Option<i64>> {
        let full_key = self.client.prefixed_key(key);
        let mut conn = self.client.conn_mut();
        let result: Option<i64> = conn.get(&full_key).await.map_err(Self::map_err)?;
        Ok(result)
    }

    async fn incr_by(&self, key: &str, amount: i64) -> AppResult<i64> {
        let full_key = self.client.prefixed_key(key);
        let mut conn = self.client.conn_mut();
        let result: i64 = conn.incr(&full_key, amount).await.map_err(Self::map_err)?;
        Ok(result)
    }

    async fn expire(&self, key: &str, ttl: Duration) -> AppResult<bool> {
        let full_key = self.client.prefixed_key(key);
        let mut conn = self.client.conn_mut();
        let result: bool = conn
            .expire(&full_key, ttl.as_secs() as i64)
            .await
            .map_err(Self::map_err)?;
        Ok(result)
    }

    async fn health_check(&self) -> AppResult<bool> {
        let mut conn = self.client.conn_mut();
        let pong: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(Self::map_err)?;
        Ok(pong == "PONG")
    }
}
