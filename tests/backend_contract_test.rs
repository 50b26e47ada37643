//! Contract tests for the session backend operations, run against the
//! in-memory store through the `SessionBackend` trait.

use chrono::{Duration, Utc};
use en_sessions::{InMemorySessionStore, SessionBackend, SessionData, SessionLookup};
use uuid::Uuid;

fn store() -> InMemorySessionStore {
    InMemorySessionStore::default()
}

#[tokio::test]
async fn create_without_user_id_fails() {
    let store = store();
    let result = store.create(&SessionData::default(), None).await;
    assert!(matches!(
        result,
        Err(en_sessions::SessionError::MissingUserId)
    ));
}

#[tokio::test]
async fn create_returns_distinct_ids() {
    let store = store();
    let data = SessionData::for_user(Uuid::new_v4());

    let first = store.create(&data, None).await.unwrap();
    let second = store.create(&data, None).await.unwrap();

    assert_ne!(first, second);
}

#[tokio::test]
async fn read_returns_created_record() {
    let store = store();
    let user_id = Uuid::new_v4();

    let id = store
        .create(&SessionData::for_user(user_id), None)
        .await
        .unwrap();

    match store.read(id).await.unwrap() {
        SessionLookup::Found(record) => {
            assert_eq!(record.id, id);
            assert_eq!(record.user_id, user_id);
        }
        SessionLookup::NotFound => panic!("expected the created session to be found"),
    }
}

#[tokio::test]
async fn read_unknown_id_is_not_found_not_error() {
    let store = store();
    let lookup = store.read(Uuid::new_v4()).await.unwrap();
    assert_eq!(lookup, SessionLookup::NotFound);
}

#[tokio::test]
async fn update_never_changes_user_id() {
    let store = store();
    let user_id = Uuid::new_v4();
    let id = store
        .create(&SessionData::for_user(user_id), None)
        .await
        .unwrap();

    // Renewal hands over a payload naming a different user; it must be
    // ignored
    let other_user = SessionData::for_user(Uuid::new_v4());
    store
        .update(id, &other_user, Some(Utc::now() + Duration::hours(1)))
        .await
        .unwrap();

    let record = store.read(id).await.unwrap().record().cloned().unwrap();
    assert_eq!(record.user_id, user_id);
}

#[tokio::test]
async fn update_moves_expiration() {
    let store = store();
    let id = store
        .create(&SessionData::for_user(Uuid::new_v4()), None)
        .await
        .unwrap();

    let renewed = Utc::now() + Duration::days(14);
    store
        .update(id, &SessionData::default(), Some(renewed))
        .await
        .unwrap();

    assert_eq!(store.expiration_of(id).await, Some(renewed));
}

#[tokio::test]
async fn delete_unknown_id_succeeds_and_leaves_others_alone() {
    let store = store();
    let user_id = Uuid::new_v4();
    let surviving = store
        .create(&SessionData::for_user(user_id), None)
        .await
        .unwrap();

    store.delete(Uuid::new_v4()).await.unwrap();

    let record = store
        .read(surviving)
        .await
        .unwrap()
        .record()
        .cloned()
        .unwrap();
    assert_eq!(record.user_id, user_id);
}

#[tokio::test]
async fn delete_then_read_is_not_found() {
    let store = store();
    let id = store
        .create(&SessionData::for_user(Uuid::new_v4()), None)
        .await
        .unwrap();

    store.delete(id).await.unwrap();
    assert_eq!(store.read(id).await.unwrap(), SessionLookup::NotFound);

    // Deleting again is still fine
    store.delete(id).await.unwrap();
}
