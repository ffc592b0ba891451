//! Request DTOs for the board API.

use serde::Deserialize;

/// Body of POST /api/threads/{board}.
#[derive(Debug, Deserialize)]
pub struct CreateThreadRequest {
    /// Thread text.
    pub text: String,
    /// Plaintext delete password, hashed before storage.
    pub delete_password: String,
}

/// Body of PUT /api/threads/{board}.
#[derive(Debug, Deserialize)]
pub struct ReportThreadRequest {
    pub thread_id: i64,
}

/// Body of DELETE /api/threads/{board}.
#[derive(Debug, Deserialize)]
pub struct DeleteThreadRequest {
    pub thread_id: i64,
    pub delete_password: String,
}

/// Body of POST /api/replies/{board}.
#[derive(Debug, Deserialize)]
pub struct CreateReplyRequest {
    pub thread_id: i64,
    pub text: String,
    pub delete_password: String,
}

/// Query string of GET /api/replies/{board}.
#[derive(Debug, Deserialize)]
pub struct ThreadQuery {
    pub thread_id: i64,
}

/// Body of PUT /api/replies/{board}.
#[derive(Debug, Deserialize)]
pub struct ReportReplyRequest {
    pub thread_id: i64,
    pub reply_id: i64,
}

/// Body of DELETE /api/replies/{board}.
#[derive(Debug, Deserialize)]
pub struct DeleteReplyRequest {
    pub thread_id: i64,
    pub reply_id: i64,
    pub delete_password: String,
}
