//! Integration tests for the PostgreSQL-backed store.
//!
//! These need a running database and are ignored by default. Run with:
//!
//! ```bash
//! DATABASE_URL=postgres://localhost/en_sessions_test cargo test -- --ignored
//! ```

use chrono::{Duration, Utc};
use en_sessions::{
    DatabaseSessionStore, SessionBackend, SessionConfig, SessionData, SessionLookup,
};
use uuid::Uuid;

async fn store() -> DatabaseSessionStore {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for postgres tests");
    let pool = sqlx::PgPool::connect(&url).await.expect("connect");

    let store = DatabaseSessionStore::new(pool, &SessionConfig::default());
    store.migrate().await.expect("migrate");
    store
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance via DATABASE_URL"]
async fn full_session_lifecycle() {
    let store = store().await;
    let user_id = Uuid::new_v4();

    // Create without a user is a contract violation
    assert!(store.create(&SessionData::default(), None).await.is_err());

    let id = store
        .create(&SessionData::for_user(user_id), None)
        .await
        .unwrap();

    let record = store.read(id).await.unwrap().record().cloned().unwrap();
    assert_eq!(record.id, id);
    assert_eq!(record.user_id, user_id);

    // Renewal ignores everything but the expiration
    store
        .update(
            id,
            &SessionData::for_user(Uuid::new_v4()),
            Some(Utc::now() + Duration::days(1)),
        )
        .await
        .unwrap();
    let record = store.read(id).await.unwrap().record().cloned().unwrap();
    assert_eq!(record.user_id, user_id);

    store.delete(id).await.unwrap();
    assert_eq!(store.read(id).await.unwrap(), SessionLookup::NotFound);

    // Idempotent delete
    store.delete(id).await.unwrap();
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance via DATABASE_URL"]
async fn read_unknown_id_is_not_found() {
    let store = store().await;
    let lookup = store.read(Uuid::new_v4()).await.unwrap();
    assert_eq!(lookup, SessionLookup::NotFound);
}
