//! API tests for /api/threads/:board.
//!
//! End-to-end tests over the real router with an in-memory database.

use anonboard::web::handlers::AppState;
use anonboard::web::router::{create_health_router, create_router};
use anonboard::Database;
use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use std::sync::Arc;

/// Create a test server with an in-memory database.
async fn create_test_server() -> (TestServer, Database) {
    let db = Database::open_in_memory()
        .await
        .expect("Failed to create test database");

    let app_state = Arc::new(AppState::new(db.clone()));
    let router = create_router(app_state).merge(create_health_router());

    let server = TestServer::new(router).expect("Failed to create test server");
    (server, db)
}

/// Post a thread and return the response.
async fn post_thread(server: &TestServer, board: &str, text: &str, password: &str) {
    let response = server
        .post(&format!("/api/threads/{board}"))
        .json(&json!({ "text": text, "delete_password": password }))
        .await;
    response.assert_status(StatusCode::FOUND);
}

/// Fetch the thread listing for a board.
async fn get_threads(server: &TestServer, board: &str) -> Value {
    let response = server.get(&format!("/api/threads/{board}")).await;
    response.assert_status_ok();
    response.json()
}

fn parse_ts(value: &Value) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value.as_str().expect("timestamp string"))
        .expect("RFC 3339 timestamp")
        .with_timezone(&Utc)
}

// ============================================================================
// Create Thread Tests
// ============================================================================

#[tokio::test]
async fn test_create_thread_redirects_to_board() {
    let (server, _db) = create_test_server().await;

    let response = server
        .post("/api/threads/general")
        .json(&json!({ "text": "first", "delete_password": "pwd" }))
        .await;

    response.assert_status(StatusCode::FOUND);
    let location = response.header("location");
    assert_eq!(location.to_str().unwrap(), "/b/general");
}

#[tokio::test]
async fn test_created_thread_shape_in_listing() {
    let (server, _db) = create_test_server().await;

    post_thread(&server, "general", "hello board", "pwd").await;
    let threads = get_threads(&server, "general").await;

    let list = threads.as_array().unwrap();
    assert_eq!(list.len(), 1);

    let thread = &list[0];
    assert!(thread["_id"].is_i64());
    assert_eq!(thread["board"], "general");
    assert_eq!(thread["text"], "hello board");
    assert_eq!(thread["created_on"], thread["bumped_on"]);
    assert_eq!(thread["replies"].as_array().unwrap().len(), 0);
    assert_eq!(thread["replycount"], 0);
    assert!(thread.get("reported").is_none());
    assert!(thread.get("delete_password").is_none());
}

#[tokio::test]
async fn test_threads_are_board_scoped() {
    let (server, _db) = create_test_server().await;

    post_thread(&server, "cats", "meow", "pwd").await;
    post_thread(&server, "dogs", "woof", "pwd").await;

    let cats = get_threads(&server, "cats").await;
    assert_eq!(cats.as_array().unwrap().len(), 1);
    assert_eq!(cats[0]["text"], "meow");

    let empty = get_threads(&server, "birds").await;
    assert_eq!(empty.as_array().unwrap().len(), 0);
}

// ============================================================================
// Listing Window Tests
// ============================================================================

#[tokio::test]
async fn test_listing_caps_at_ten_threads() {
    let (server, _db) = create_test_server().await;

    for i in 0..11 {
        post_thread(&server, "busy", &format!("thread {i}"), "pwd").await;
    }

    let threads = get_threads(&server, "busy").await;
    let list = threads.as_array().unwrap();
    assert_eq!(list.len(), 10);

    // Ordered by bumped_on descending.
    let bumps: Vec<DateTime<Utc>> = list.iter().map(|t| parse_ts(&t["bumped_on"])).collect();
    for pair in bumps.windows(2) {
        assert!(pair[0] >= pair[1]);
    }
}

#[tokio::test]
async fn test_reply_bumps_thread_to_top() {
    let (server, _db) = create_test_server().await;

    post_thread(&server, "general", "older", "pwd").await;
    post_thread(&server, "general", "newer", "pwd").await;

    let threads = get_threads(&server, "general").await;
    assert_eq!(threads[0]["text"], "newer");
    let older_id = threads[1]["_id"].as_i64().unwrap();

    let response = server
        .post("/api/replies/general")
        .json(&json!({ "thread_id": older_id, "text": "bump", "delete_password": "pwd" }))
        .await;
    response.assert_status(StatusCode::FOUND);

    let threads = get_threads(&server, "general").await;
    assert_eq!(threads[0]["text"], "older");
}

#[tokio::test]
async fn test_listing_truncates_replies_to_three_most_recent() {
    let (server, _db) = create_test_server().await;

    post_thread(&server, "general", "busy thread", "pwd").await;
    let threads = get_threads(&server, "general").await;
    let thread_id = threads[0]["_id"].as_i64().unwrap();

    for i in 0..4 {
        server
            .post("/api/replies/general")
            .json(&json!({ "thread_id": thread_id, "text": format!("reply {i}"), "delete_password": "pwd" }))
            .await
            .assert_status(StatusCode::FOUND);
    }

    let threads = get_threads(&server, "general").await;
    let thread = &threads[0];

    assert_eq!(thread["replycount"], 4);
    let replies = thread["replies"].as_array().unwrap();
    assert_eq!(replies.len(), 3);
    assert_eq!(replies[0]["text"], "reply 1");
    assert_eq!(replies[1]["text"], "reply 2");
    assert_eq!(replies[2]["text"], "reply 3");

    // Reply projection carries no write-only fields.
    assert!(replies[0].get("delete_password").is_none());
    assert!(replies[0].get("reported").is_none());
}

// ============================================================================
// Report Thread Tests
// ============================================================================

#[tokio::test]
async fn test_report_thread_success_and_bump() {
    let (server, db) = create_test_server().await;

    post_thread(&server, "general", "spam", "pwd").await;
    let threads = get_threads(&server, "general").await;
    let thread_id = threads[0]["_id"].as_i64().unwrap();
    let bumped_before = parse_ts(&threads[0]["bumped_on"]);

    let response = server
        .put("/api/threads/general")
        .json(&json!({ "thread_id": thread_id }))
        .await;
    response.assert_status_ok();
    response.assert_text("success");

    // The flag is write-only on the wire; check it through the repository.
    let repo = anonboard::ThreadRepository::new(db.pool());
    let thread = repo.get_by_id(thread_id).await.unwrap().unwrap();
    assert!(thread.reported);
    assert!(thread.bumped_on >= bumped_before);
}

#[tokio::test]
async fn test_report_nonexistent_thread() {
    let (server, _db) = create_test_server().await;

    let response = server
        .put("/api/threads/general")
        .json(&json!({ "thread_id": 424242 }))
        .await;
    response.assert_status_ok();
    response.assert_text("update failed");
}

// ============================================================================
// Delete Thread Tests
// ============================================================================

#[tokio::test]
async fn test_delete_thread_wrong_password() {
    let (server, _db) = create_test_server().await;

    post_thread(&server, "general", "stays put", "right").await;
    let threads = get_threads(&server, "general").await;
    let thread_id = threads[0]["_id"].as_i64().unwrap();

    let response = server
        .delete("/api/threads/general")
        .json(&json!({ "thread_id": thread_id, "delete_password": "wrong" }))
        .await;
    response.assert_status_ok();
    response.assert_text("incorrect password");

    // Still retrievable.
    let threads = get_threads(&server, "general").await;
    assert_eq!(threads.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_thread_correct_password() {
    let (server, _db) = create_test_server().await;

    post_thread(&server, "general", "short lived", "right").await;
    let threads = get_threads(&server, "general").await;
    let thread_id = threads[0]["_id"].as_i64().unwrap();

    let response = server
        .delete("/api/threads/general")
        .json(&json!({ "thread_id": thread_id, "delete_password": "right" }))
        .await;
    response.assert_status_ok();
    response.assert_text("success");

    let threads = get_threads(&server, "general").await;
    assert_eq!(threads.as_array().unwrap().len(), 0);

    let response = server
        .get(&format!("/api/replies/general?thread_id={thread_id}"))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_nonexistent_thread_masked_as_incorrect_password() {
    let (server, _db) = create_test_server().await;

    let response = server
        .delete("/api/threads/general")
        .json(&json!({ "thread_id": 424242, "delete_password": "anything" }))
        .await;
    response.assert_status_ok();
    response.assert_text("incorrect password");
}

// ============================================================================
// Misc Routes
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let (server, _db) = create_test_server().await;

    let response = server.get("/health").await;
    response.assert_status_ok();
    response.assert_text("OK");
}

#[tokio::test]
async fn test_unmatched_route_falls_back_to_404() {
    let (server, _db) = create_test_server().await;

    let response = server.get("/api/nothing/here").await;
    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_text("Not Found");
}
