use crate::error::Result;
use crate::session::SessionConfig;
use crate::traits::session::{
    ExpirationPolicy, SessionBackend, SessionData, SessionLookup, SessionRecord,
};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

struct StoredSession {
    user_id: Uuid,
    expiration_date: DateTime<Utc>,
}

/// In-memory session store implementation
///
/// Stores sessions in a HashMap with the same contract as the
/// database-backed store. Suitable for development and testing, but not for
/// production (sessions are lost on restart and not shared across
/// instances).
#[derive(Clone)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, StoredSession>>>,
    expiry: ExpirationPolicy,
}

impl InMemorySessionStore {
    /// Create a store using the config's default TTL as the expiration
    /// policy
    pub fn new(config: &SessionConfig) -> Self {
        let ttl = Duration::seconds(config.default_ttl().as_secs() as i64);
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            expiry: Arc::new(move || Utc::now() + ttl),
        }
    }

    /// Replace the expiration policy
    pub fn with_expiration_policy(mut self, expiry: ExpirationPolicy) -> Self {
        self.expiry = expiry;
        self
    }

    /// The stored expiration for a session, for inspection in tests
    pub async fn expiration_of(&self, id: Uuid) -> Option<DateTime<Utc>> {
        self.sessions
            .read()
            .await
            .get(&id)
            .map(|s| s.expiration_date)
    }

    fn expiration_or_default(&self, expires: Option<DateTime<Utc>>) -> DateTime<Utc> {
        expires.unwrap_or_else(|| (self.expiry)())
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new(&SessionConfig::default())
    }
}

#[async_trait]
impl SessionBackend for InMemorySessionStore {
    async fn create(&self, data: &SessionData, expires: Option<DateTime<Utc>>) -> Result<Uuid> {
        let user_id = data.require_user_id()?;
        let expiration_date = self.expiration_or_default(expires);

        let id = Uuid::new_v4();
        let mut sessions = self.sessions.write().await;
        sessions.insert(
            id,
            StoredSession {
                user_id,
                expiration_date,
            },
        );

        Ok(id)
    }

    async fn read(&self, id: Uuid) -> Result<SessionLookup> {
        let sessions = self.sessions.read().await;
        let record = sessions.get(&id).map(|stored| SessionRecord {
            id,
            user_id: stored.user_id,
        });

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

        let mut sessions = self.sessions.write().await;
        if let Some(stored) = sessions.get_mut(&id) {
            stored.expiration_date = expiration_date;
        }

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let mut sessions = self.sessions.write().await;
        sessions.remove(&id);
        Ok(())
    }
}
