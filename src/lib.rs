//! en-sessions - Cookie-backed and PostgreSQL-backed session stores
//!
//! Wires a signed-cookie session mechanism to a PostgreSQL session store,
//! and separately exposes a stateless cookie-only store. Both share the same
//! cookie attributes (`en_session`; `SameSite=Lax; Path=/; HttpOnly[;
//! Secure]`) and a rotatable list of signing secrets from `SESSION_SECRET`.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use en_sessions::{DatabaseSessionStore, SessionBackend, SessionConfig, SessionData};
//!
//! #[tokio::main]
//! async fn main() -> en_sessions::Result<()> {
//!     en_sessions::init_tracing();
//!
//!     let config = SessionConfig::from_env()?;
//!     let pool = sqlx::PgPool::connect(&std::env::var("DATABASE_URL").unwrap()).await?;
//!
//!     let store = DatabaseSessionStore::new(pool, &config);
//!     store.migrate().await?;
//!
//!     let id = store.create(&SessionData::for_user(user_id), None).await?;
//!     // seal `id` into the session cookie...
//!     Ok(())
//! }
//! ```

mod error;
pub mod session;
pub mod traits;
mod utils;

// Re-exports for public API
pub use error::{Result, SessionError};
pub use session::{
    CookieSessionStore, DatabaseSessionStore, InMemorySessionStore, Keyring, SessionConfig,
};
pub use traits::session::{
    ExpirationPolicy, SessionBackend, SessionData, SessionLookup, SessionRecord,
};

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing/logging with sensible defaults
///
/// This should be called early in your application, typically in main().
///
/// # Environment Variables
///
/// - `RUST_LOG`: Set log level (e.g., "info", "debug", "en_sessions=debug")
/// - `EN_LOG_JSON`: Set to "true" for JSON formatted logs
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let json_logs = std::env::var("EN_LOG_JSON")
        .map(|v| v.parse::<bool>().unwrap_or(false))
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}
