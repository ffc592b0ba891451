//! Domain types for threads and replies.

use chrono::{DateTime, Utc};

/// Literal text left in place of a deleted reply.
///
/// Reply deletion is a content tombstone, never a removal: the reply keeps
/// its id and position and still counts toward `replycount`.
pub const REPLY_TOMBSTONE: &str = "[deleted]";

/// Maximum number of threads returned by a board listing.
pub const THREAD_WINDOW: i64 = 10;

/// Maximum number of replies attached to each listed thread.
pub const REPLY_WINDOW: i64 = 3;

/// A top-level post on a board.
///
/// The stored delete-password hash is deliberately absent; repositories
/// expose it only through dedicated hash-lookup methods.
#[derive(Debug, Clone, PartialEq)]
pub struct Thread {
    /// Server-generated id, unique across all boards.
    pub id: i64,
    /// Board the thread belongs to (free-form key, no registry).
    pub board: String,
    /// Thread text.
    pub text: String,
    /// Creation time, immutable.
    pub created_on: DateTime<Utc>,
    /// Last bump time: advances on reply creation, reports, and reply
    /// tombstoning. Monotonically non-decreasing.
    pub bumped_on: DateTime<Utc>,
    /// Whether the thread has been reported.
    pub reported: bool,
}

/// A sub-post owned by exactly one thread.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    /// Server-generated id, unique within the parent thread.
    pub id: i64,
    /// Owning thread.
    pub thread_id: i64,
    /// Reply text; becomes [`REPLY_TOMBSTONE`] on deletion.
    pub text: String,
    /// Creation time, immutable.
    pub created_on: DateTime<Utc>,
    /// Whether the reply has been reported.
    pub reported: bool,
}

impl Reply {
    /// Whether this reply's content has been tombstoned.
    pub fn is_deleted(&self) -> bool {
        self.text == REPLY_TOMBSTONE
    }
}

/// Data for creating a thread. `delete_password` is already hashed.
#[derive(Debug, Clone)]
pub struct NewThread {
    pub board: String,
    pub text: String,
    pub delete_password: String,
}

impl NewThread {
    pub fn new(
        board: impl Into<String>,
        text: impl Into<String>,
        delete_password: impl Into<String>,
    ) -> Self {
        Self {
            board: board.into(),
            text: text.into(),
            delete_password: delete_password.into(),
        }
    }
}

/// Data for appending a reply. `delete_password` is already hashed.
#[derive(Debug, Clone)]
pub struct NewReply {
    pub thread_id: i64,
    pub text: String,
    pub delete_password: String,
}

impl NewReply {
    pub fn new(thread_id: i64, text: impl Into<String>, delete_password: impl Into<String>) -> Self {
        Self {
            thread_id,
            text: text.into(),
            delete_password: delete_password.into(),
        }
    }
}

/// A thread as it appears in a board listing: the reply sequence truncated
/// to the most recent [`REPLY_WINDOW`] entries, with the full count kept.
#[derive(Debug, Clone)]
pub struct ThreadSummary {
    pub thread: Thread,
    /// Most recent replies, in chronological order.
    pub replies: Vec<Reply>,
    /// Full reply count before truncation.
    pub replycount: i64,
}

/// A thread with its complete reply sequence.
#[derive(Debug, Clone)]
pub struct ThreadView {
    pub thread: Thread,
    pub replies: Vec<Reply>,
}
