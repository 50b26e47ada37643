//! Database-backed session store
//!
//! Persists session identity and expiration in a PostgreSQL `sessions`
//! table; the cookie carries only the session id. Each operation is a single
//! direct query with no cross-call coordination: concurrent renewals of the
//! same session are last-write-wins on the expiration, which is fine because
//! nothing else ever moves.

use crate::error::Result;
use crate::session::SessionConfig;
use crate::traits::session::{
    ExpirationPolicy, SessionBackend, SessionData, SessionLookup, SessionRecord,
};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

/// PostgreSQL-backed session store
///
/// Expects a `sessions` table with `id` (uuid, server-generated), `user_id`
/// (uuid, required) and `expiration_date` (timestamptz); see the bundled
/// migration, applied via [`migrate`](Self::migrate).
#[derive(Clone)]
pub struct DatabaseSessionStore {
    pool: PgPool,
    expiry: ExpirationPolicy,
}

impl DatabaseSessionStore {
    /// Create a store using the config's default TTL as the expiration
    /// policy
    pub fn new(pool: PgPool, config: &SessionConfig) -> Self {
        let ttl = Duration::seconds(config.default_ttl().as_secs() as i64);
        Self {
            pool,
            expiry: Arc::new(move || Utc::now() + ttl),
        }
    }

    /// Replace the expiration policy, e.g. to delegate to an application
    /// auth module
    pub fn with_expiration_policy(mut self, expiry: ExpirationPolicy) -> Self {
        self.expiry = expiry;
        self
    }

    /// Run the bundled migration creating the `sessions` table
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    fn expiration_or_default(&self, expires: Option<DateTime<Utc>>) -> DateTime<Utc> {
        expires.unwrap_or_else(|| (self.expiry)())
    }
}

#[async_trait]
impl SessionBackend for DatabaseSessionStore {
    async fn create(&self, data: &SessionData, expires: Option<DateTime<Utc>>) -> Result<Uuid> {
        let user_id = data.require_user_id()?;
        let expiration_date = self.expiration_or_default(expires);

        let id: Uuid = sqlx::query_scalar(
            "INSERT INTO sessions (user_id, expiration_date) VALUES ($1, $2) RETURNING id",
        )
        .bind(user_id)
        .bind(expiration_date)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(session_id = %id, user_id = %user_id, "Session created");
        Ok(id)
    }

    async fn read(&self, id: Uuid) -> Result<SessionLookup> {
        let record: Option<SessionRecord> =
            sqlx::query_as("SELECT id, user_id FROM sessions WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(record.into())
    }

    async fn update(
        &self,
        id: Uuid,
        _data: &SessionData,
        expires: Option<DateTime<Utc>>,
    ) -> Result<()> {
        // Only the expiration moves on renewal; user_id is immutable
        let expiration_date = self.expiration_or_default(expires);

        sqlx::query("UPDATE sessions SET expiration_date = $2 WHERE id = $1")
            .bind(id)
            .bind(expiration_date)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        // Idempotent-delete contract: deletion always reports success.
        // Absence is expected (logout racing an expiry sweep); transport
        // failures are logged rather than silently dropped so real outages
        // stay visible.
        match sqlx::query("DELETE FROM sessions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
        {
            Ok(_) => {}
            Err(err) => {
                tracing::warn!(session_id = %id, error = %err, "Session delete failed");
            }
        }

        Ok(())
    }
}
