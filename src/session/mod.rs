//! Session stores and shared cookie configuration.
//!
//! Two independent stores share the same cookie attributes and signing
//! secrets: [`DatabaseSessionStore`] persists sessions in PostgreSQL with
//! the cookie carrying only the id, and [`CookieSessionStore`] keeps the
//! whole payload in the signed cookie.

mod config;
mod cookie;
mod database;
mod in_memory;
mod keyring;

pub use config::SessionConfig;
pub use cookie::CookieSessionStore;
pub use database::DatabaseSessionStore;
pub use in_memory::InMemorySessionStore;
pub use keyring::Keyring;
