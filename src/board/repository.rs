//! Thread and reply persistence.
//!
//! One repository covers both tables because replies have no lifecycle of
//! their own: every reply mutation also touches its parent thread.

use chrono::{DateTime, Utc};

use super::types::{NewReply, NewThread, Reply, Thread, REPLY_TOMBSTONE};
use crate::db::DbPool;
use crate::{BoardError, Result};

/// Repository for thread and reply operations.
pub struct ThreadRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> ThreadRepository<'a> {
    /// Create a new ThreadRepository with the given pool reference.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Create a new thread.
    ///
    /// Sets `created_on = bumped_on = now` and returns the stored thread
    /// including the generated id.
    pub async fn create(&self, new_thread: &NewThread) -> Result<Thread> {
        let now = Utc::now();
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO threads (board, text, created_on, bumped_on, reported, delete_password)
             VALUES (?, ?, ?, ?, 0, ?) RETURNING id",
        )
        .bind(&new_thread.board)
        .bind(&new_thread.text)
        .bind(now)
        .bind(now)
        .bind(&new_thread.delete_password)
        .fetch_one(self.pool)
        .await?;

        self.get_by_id(id)
            .await?
            .ok_or_else(|| BoardError::NotFound("thread".to_string()))
    }

    /// Get a thread by id.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Thread>> {
        let row: Option<ThreadRow> = sqlx::query_as(
            "SELECT id, board, text, created_on, bumped_on, reported
             FROM threads WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(ThreadRow::into_thread))
    }

    /// List the most recently bumped threads on a board.
    ///
    /// Ordered by `bumped_on` descending; equal bump times resolve to
    /// insertion order (ascending id).
    pub async fn list_recent_by_board(&self, board: &str, limit: i64) -> Result<Vec<Thread>> {
        let rows: Vec<ThreadRow> = sqlx::query_as(
            "SELECT id, board, text, created_on, bumped_on, reported
             FROM threads WHERE board = ?
             ORDER BY bumped_on DESC, id ASC LIMIT ?",
        )
        .bind(board)
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(ThreadRow::into_thread).collect())
    }

    /// Mark a thread reported and bump it.
    ///
    /// Returns false when no thread matched.
    pub async fn set_reported(&self, id: i64, now: DateTime<Utc>) -> Result<bool> {
        let result = sqlx::query("UPDATE threads SET reported = 1, bumped_on = ? WHERE id = ?")
            .bind(now)
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a thread and (via cascade) its replies.
    ///
    /// Returns true if a thread was deleted.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM threads WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Load only a thread's stored delete-password hash.
    pub async fn password_hash(&self, id: i64) -> Result<Option<String>> {
        let hash: Option<String> =
            sqlx::query_scalar("SELECT delete_password FROM threads WHERE id = ?")
                .bind(id)
                .fetch_optional(self.pool)
                .await?;
        Ok(hash)
    }

    /// The complete reply sequence of a thread, in insertion order.
    pub async fn replies_for(&self, thread_id: i64) -> Result<Vec<Reply>> {
        let rows: Vec<ReplyRow> = sqlx::query_as(
            "SELECT id, thread_id, text, created_on, reported
             FROM replies WHERE thread_id = ? ORDER BY id ASC",
        )
        .bind(thread_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(ReplyRow::into_reply).collect())
    }

    /// The `limit` most recent replies of a thread, in chronological order.
    pub async fn recent_replies(&self, thread_id: i64, limit: i64) -> Result<Vec<Reply>> {
        let rows: Vec<ReplyRow> = sqlx::query_as(
            "SELECT id, thread_id, text, created_on, reported
             FROM replies WHERE thread_id = ? ORDER BY id DESC LIMIT ?",
        )
        .bind(thread_id)
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        let mut replies: Vec<Reply> = rows.into_iter().map(ReplyRow::into_reply).collect();
        replies.reverse();
        Ok(replies)
    }

    /// Full reply count of a thread, tombstones included.
    pub async fn count_replies(&self, thread_id: i64) -> Result<i64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM replies WHERE thread_id = ?")
            .bind(thread_id)
            .fetch_one(self.pool)
            .await?;
        Ok(count.0)
    }

    /// Append a reply to a thread and bump it.
    ///
    /// Returns the stored reply, or None when the thread does not exist.
    /// Bumping first doubles as the existence check.
    pub async fn insert_reply(&self, new_reply: &NewReply, now: DateTime<Utc>) -> Result<Option<Reply>> {
        let bumped = sqlx::query("UPDATE threads SET bumped_on = ? WHERE id = ?")
            .bind(now)
            .bind(new_reply.thread_id)
            .execute(self.pool)
            .await?;
        if bumped.rows_affected() == 0 {
            return Ok(None);
        }

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO replies (thread_id, text, created_on, reported, delete_password)
             VALUES (?, ?, ?, 0, ?) RETURNING id",
        )
        .bind(new_reply.thread_id)
        .bind(&new_reply.text)
        .bind(now)
        .bind(&new_reply.delete_password)
        .fetch_one(self.pool)
        .await?;

        Ok(Some(Reply {
            id,
            thread_id: new_reply.thread_id,
            text: new_reply.text.clone(),
            created_on: now,
            reported: false,
        }))
    }

    /// Mark a reply reported and bump its thread.
    ///
    /// Returns false when no reply matched; the parent is only bumped on a
    /// match.
    pub async fn set_reply_reported(
        &self,
        thread_id: i64,
        reply_id: i64,
        now: DateTime<Utc>,
    ) -> Result<bool> {
        let result = sqlx::query("UPDATE replies SET reported = 1 WHERE id = ? AND thread_id = ?")
            .bind(reply_id)
            .bind(thread_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Ok(false);
        }

        sqlx::query("UPDATE threads SET bumped_on = ? WHERE id = ?")
            .bind(now)
            .bind(thread_id)
            .execute(self.pool)
            .await?;
        Ok(true)
    }

    /// Load only a reply's stored delete-password hash.
    pub async fn reply_password_hash(&self, thread_id: i64, reply_id: i64) -> Result<Option<String>> {
        let hash: Option<String> = sqlx::query_scalar(
            "SELECT delete_password FROM replies WHERE id = ? AND thread_id = ?",
        )
        .bind(reply_id)
        .bind(thread_id)
        .fetch_optional(self.pool)
        .await?;
        Ok(hash)
    }

    /// Replace a reply's text with the tombstone marker and bump its thread.
    ///
    /// The reply row is kept, preserving its id, position and the thread's
    /// reply count. Returns false when no reply matched.
    pub async fn tombstone_reply(
        &self,
        thread_id: i64,
        reply_id: i64,
        now: DateTime<Utc>,
    ) -> Result<bool> {
        let result = sqlx::query("UPDATE replies SET text = ? WHERE id = ? AND thread_id = ?")
            .bind(REPLY_TOMBSTONE)
            .bind(reply_id)
            .bind(thread_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Ok(false);
        }

        sqlx::query("UPDATE threads SET bumped_on = ? WHERE id = ?")
            .bind(now)
            .bind(thread_id)
            .execute(self.pool)
            .await?;
        Ok(true)
    }
}

/// Internal struct for mapping database rows to Thread.
#[derive(sqlx::FromRow)]
struct ThreadRow {
    id: i64,
    board: String,
    text: String,
    created_on: DateTime<Utc>,
    bumped_on: DateTime<Utc>,
    reported: bool,
}

impl ThreadRow {
    fn into_thread(self) -> Thread {
        Thread {
            id: self.id,
            board: self.board,
            text: self.text,
            created_on: self.created_on,
            bumped_on: self.bumped_on,
            reported: self.reported,
        }
    }
}

/// Internal struct for mapping database rows to Reply.
#[derive(sqlx::FromRow)]
struct ReplyRow {
    id: i64,
    thread_id: i64,
    text: String,
    created_on: DateTime<Utc>,
    reported: bool,
}

impl ReplyRow {
    fn into_reply(self) -> Reply {
        Reply {
            id: self.id,
            thread_id: self.thread_id,
            text: self.text,
            created_on: self.created_on,
            reported: self.reported,
        }
    }
}
