//! Response DTOs for the board API.
//!
//! Wire names follow the original contract: ids serialize as `_id`,
//! timestamps as RFC 3339. Stored password hashes and reported flags never
//! appear here; the projection happens by construction, not by filtering.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::board::{Reply, Thread, ThreadSummary, ThreadView};

/// A reply as exposed to clients.
#[derive(Debug, Serialize)]
pub struct ReplyResponse {
    #[serde(rename = "_id")]
    pub id: i64,
    pub text: String,
    pub created_on: DateTime<Utc>,
}

impl From<Reply> for ReplyResponse {
    fn from(reply: Reply) -> Self {
        Self {
            id: reply.id,
            text: reply.text,
            created_on: reply.created_on,
        }
    }
}

/// A thread in a board listing: truncated replies plus the full count.
#[derive(Debug, Serialize)]
pub struct ThreadSummaryResponse {
    #[serde(rename = "_id")]
    pub id: i64,
    pub board: String,
    pub text: String,
    pub created_on: DateTime<Utc>,
    pub bumped_on: DateTime<Utc>,
    pub replies: Vec<ReplyResponse>,
    pub replycount: i64,
}

impl From<ThreadSummary> for ThreadSummaryResponse {
    fn from(summary: ThreadSummary) -> Self {
        let Thread {
            id,
            board,
            text,
            created_on,
            bumped_on,
            ..
        } = summary.thread;
        Self {
            id,
            board,
            text,
            created_on,
            bumped_on,
            replies: summary.replies.into_iter().map(ReplyResponse::from).collect(),
            replycount: summary.replycount,
        }
    }
}

/// A single thread with its complete reply sequence.
#[derive(Debug, Serialize)]
pub struct ThreadResponse {
    #[serde(rename = "_id")]
    pub id: i64,
    pub board: String,
    pub text: String,
    pub created_on: DateTime<Utc>,
    pub bumped_on: DateTime<Utc>,
    pub replies: Vec<ReplyResponse>,
}

impl From<ThreadView> for ThreadResponse {
    fn from(view: ThreadView) -> Self {
        let Thread {
            id,
            board,
            text,
            created_on,
            bumped_on,
            ..
        } = view.thread;
        Self {
            id,
            board,
            text,
            created_on,
            bumped_on,
            replies: view.replies.into_iter().map(ReplyResponse::from).collect(),
        }
    }
}
