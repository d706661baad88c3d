use spotirec::session::{MemorySessionStore, SessionStore};
use spotirec::types::Session;

// Helper function to create a test session
fn create_test_session(access_token: &str, expires_at: u64) -> Session {
    Session {
        access_token: access_token.to_string(),
        refresh_token: Some(format!("{access_token}_refresh")),
        expires_at,
    }
}

#[tokio::test]
async fn test_get_missing_session() {
    let store = MemorySessionStore::new();
    assert!(store.get("nope").await.is_none());
}

#[tokio::test]
async fn test_set_and_get_session() {
    let store = MemorySessionStore::new();
    store
        .set("sid1", create_test_session("token1", 1700000000))
        .await;

    let session = store.get("sid1").await.unwrap();
    assert_eq!(session.access_token, "token1");
    assert_eq!(session.refresh_token.as_deref(), Some("token1_refresh"));
    assert_eq!(session.expires_at, 1700000000);
}

#[tokio::test]
async fn test_set_overwrites_session() {
    // Each successful callback overwrites the session under its id
    let store = MemorySessionStore::new();
    store
        .set("sid1", create_test_session("token1", 1700000000))
        .await;
    store
        .set("sid1", create_test_session("token2", 1700003600))
        .await;

    let session = store.get("sid1").await.unwrap();
    assert_eq!(session.access_token, "token2");
    assert_eq!(session.expires_at, 1700003600);
}

#[tokio::test]
async fn test_clear_session() {
    let store = MemorySessionStore::new();
    store
        .set("sid1", create_test_session("token1", 1700000000))
        .await;
    store.clear("sid1").await;

    assert!(store.get("sid1").await.is_none());

    // Clearing a missing id is a no-op
    store.clear("sid1").await;
}

#[tokio::test]
async fn test_sessions_are_independent() {
    let store = MemorySessionStore::new();
    store
        .set("sid1", create_test_session("token1", 1700000000))
        .await;
    store
        .set("sid2", create_test_session("token2", 1700003600))
        .await;

    assert_eq!(store.get("sid1").await.unwrap().access_token, "token1");
    assert_eq!(store.get("sid2").await.unwrap().access_token, "token2");
}
