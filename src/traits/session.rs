//! Session backend trait
//!
//! This trait abstracts the four session lifecycle operations, allowing the
//! host application to swap between database-backed, in-memory, or custom
//! implementations.

use crate::error::{Result, SessionError};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Session payload as handed over by the host framework.
///
/// The framework does not guarantee a user is present; backends enforce that
/// at creation time. Serializable so the cookie-only store can carry it
/// verbatim inside the signed cookie.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionData {
    /// The authenticated user this session belongs to
    pub user_id: Option<Uuid>,
}

impl SessionData {
    /// Create a payload for an authenticated user
    pub fn for_user(user_id: Uuid) -> Self {
        Self {
            user_id: Some(user_id),
        }
    }

    /// The user id, or the contract-violation error if absent.
    ///
    /// A session record cannot exist without an associated user, so backends
    /// call this before touching storage.
    pub fn require_user_id(&self) -> Result<Uuid> {
        self.user_id.ok_or(SessionError::MissingUserId)
    }
}

/// Projection of a persisted session row returned by reads.
///
/// Only `id` and `user_id` are projected; the expiration is write-only from
/// the caller's perspective.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct SessionRecord {
    /// Unique identifier for the session record, server-generated
    pub id: Uuid,
    /// User the session belongs to
    pub user_id: Uuid,
}

/// Result of a session lookup by id.
///
/// Absence is an expected outcome (expired, deleted, or forged id), not an
/// error: the host framework treats `NotFound` as an empty session. Only
/// transport failures surface as errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionLookup {
    /// A matching session row exists
    Found(SessionRecord),
    /// No session row matches the id
    NotFound,
}

impl SessionLookup {
    /// The record, if the lookup found one
    pub fn record(&self) -> Option<&SessionRecord> {
        match self {
            Self::Found(record) => Some(record),
            Self::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

impl From<Option<SessionRecord>> for SessionLookup {
    fn from(record: Option<SessionRecord>) -> Self {
        match record {
            Some(record) => Self::Found(record),
            None => Self::NotFound,
        }
    }
}

/// Policy producing the default expiration for sessions created or renewed
/// without an explicit one.
///
/// Owned by the application; backends invoke it whenever `create`/`update`
/// is called with `expires: None`.
pub type ExpirationPolicy = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Session backend trait
///
/// Each operation is a single independent unit of work: no transactions span
/// operations, no retries, and concurrent calls for the same id are not
/// coordinated (last-write-wins on expiration updates).
#[async_trait]
pub trait SessionBackend: Send + Sync {
    /// Create a session for the user in `data`, returning the new session id.
    ///
    /// The id is what the cookie carries. Computes a default expiration via
    /// the backend's [`ExpirationPolicy`] when `expires` is `None`.
    ///
    /// # Errors
    ///
    /// [`SessionError::MissingUserId`](crate::SessionError::MissingUserId)
    /// when `data.user_id` is absent; storage failures propagate.
    async fn create(&self, data: &SessionData, expires: Option<DateTime<Utc>>) -> Result<Uuid>;

    /// Look up a session by id.
    ///
    /// Returns [`SessionLookup::NotFound`] for a missing row; only storage
    /// failures are errors.
    async fn read(&self, id: Uuid) -> Result<SessionLookup>;

    /// Renew a session's expiration.
    ///
    /// Only the expiration timestamp moves; `data` is accepted for interface
    /// compatibility with the framework contract but `user_id` is never
    /// mutated. Recomputes the default expiration when `expires` is `None`.
    async fn update(
        &self,
        id: Uuid,
        data: &SessionData,
        expires: Option<DateTime<Utc>>,
    ) -> Result<()>;

    /// Delete a session by id.
    ///
    /// Best-effort and idempotent: deleting an absent id succeeds, and
    /// unexpected storage failures are logged and discarded rather than
    /// surfaced. Callers can always treat deletion as successful.
    async fn delete(&self, id: Uuid) -> Result<()>;
}
