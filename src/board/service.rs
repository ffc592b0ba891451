//! High-level board operations.
//!
//! The service owns the password policy: handlers only ever see outcome
//! enums, never the stored hashes. A missing thread or reply on the delete
//! paths is deliberately reported as `IncorrectPassword` so that deletion
//! attempts cannot probe for existence.

use chrono::Utc;

use super::repository::ThreadRepository;
use super::types::{NewReply, NewThread, Reply, Thread, ThreadSummary, ThreadView};
use super::{REPLY_WINDOW, THREAD_WINDOW};
use crate::db::DbPool;
use crate::password::{hash_delete_password, verify_delete_password};
use crate::Result;

/// Outcome of a report operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportOutcome {
    /// The reported flag was set.
    Reported,
    /// Nothing matched; reporting is best effort.
    UpdateFailed,
}

/// Outcome of a password-gated delete operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Password verified and the content was deleted (or tombstoned).
    Deleted,
    /// Wrong password, or the target does not exist (masked).
    IncorrectPassword,
}

/// Service for thread and reply workflows.
pub struct BoardService<'a> {
    repo: ThreadRepository<'a>,
}

impl<'a> BoardService<'a> {
    /// Create a new BoardService over the given pool reference.
    pub fn new(pool: &'a DbPool) -> Self {
        Self {
            repo: ThreadRepository::new(pool),
        }
    }

    /// Create a thread, hashing the delete password before it is stored.
    pub async fn create_thread(
        &self,
        board: &str,
        text: &str,
        delete_password: &str,
    ) -> Result<Thread> {
        let hash = hash_delete_password(delete_password)?;
        self.repo.create(&NewThread::new(board, text, hash)).await
    }

    /// The board listing projection: at most [`THREAD_WINDOW`] threads,
    /// most recently bumped first, each truncated to its [`REPLY_WINDOW`]
    /// most recent replies with the full count attached.
    pub async fn recent_threads(&self, board: &str) -> Result<Vec<ThreadSummary>> {
        let threads = self.repo.list_recent_by_board(board, THREAD_WINDOW).await?;

        let mut summaries = Vec::with_capacity(threads.len());
        for thread in threads {
            let replycount = self.repo.count_replies(thread.id).await?;
            let replies = self.repo.recent_replies(thread.id, REPLY_WINDOW).await?;
            summaries.push(ThreadSummary {
                thread,
                replies,
                replycount,
            });
        }
        Ok(summaries)
    }

    /// A thread with its complete reply sequence, or None.
    pub async fn thread_with_replies(&self, thread_id: i64) -> Result<Option<ThreadView>> {
        let Some(thread) = self.repo.get_by_id(thread_id).await? else {
            return Ok(None);
        };
        let replies = self.repo.replies_for(thread_id).await?;
        Ok(Some(ThreadView { thread, replies }))
    }

    /// Report a thread.
    pub async fn report_thread(&self, thread_id: i64) -> Result<ReportOutcome> {
        if self.repo.set_reported(thread_id, Utc::now()).await? {
            Ok(ReportOutcome::Reported)
        } else {
            Ok(ReportOutcome::UpdateFailed)
        }
    }

    /// Delete a thread if the password matches its stored hash.
    pub async fn delete_thread(&self, thread_id: i64, password: &str) -> Result<DeleteOutcome> {
        let Some(hash) = self.repo.password_hash(thread_id).await? else {
            return Ok(DeleteOutcome::IncorrectPassword);
        };
        if !verify_delete_password(password, &hash) {
            return Ok(DeleteOutcome::IncorrectPassword);
        }

        // The row can vanish between the hash read and the delete; treat a
        // zero-row delete the same as a failed verification.
        if self.repo.delete(thread_id).await? {
            Ok(DeleteOutcome::Deleted)
        } else {
            Ok(DeleteOutcome::IncorrectPassword)
        }
    }

    /// Append a reply to a thread, bumping it.
    ///
    /// Returns None when the thread does not exist.
    pub async fn create_reply(
        &self,
        thread_id: i64,
        text: &str,
        delete_password: &str,
    ) -> Result<Option<Reply>> {
        let hash = hash_delete_password(delete_password)?;
        self.repo
            .insert_reply(&NewReply::new(thread_id, text, hash), Utc::now())
            .await
    }

    /// Report a reply within a thread.
    pub async fn report_reply(&self, thread_id: i64, reply_id: i64) -> Result<ReportOutcome> {
        if self
            .repo
            .set_reply_reported(thread_id, reply_id, Utc::now())
            .await?
        {
            Ok(ReportOutcome::Reported)
        } else {
            Ok(ReportOutcome::UpdateFailed)
        }
    }

    /// Tombstone a reply if the password matches its stored hash.
    ///
    /// The reply keeps its id and position; only its text becomes the
    /// tombstone marker.
    pub async fn delete_reply(
        &self,
        thread_id: i64,
        reply_id: i64,
        password: &str,
    ) -> Result<DeleteOutcome> {
        let Some(hash) = self.repo.reply_password_hash(thread_id, reply_id).await? else {
            return Ok(DeleteOutcome::IncorrectPassword);
        };
        if !verify_delete_password(password, &hash) {
            return Ok(DeleteOutcome::IncorrectPassword);
        }

        if self
            .repo
            .tombstone_reply(thread_id, reply_id, Utc::now())
            .await?
        {
            Ok(DeleteOutcome::Deleted)
        } else {
            Ok(DeleteOutcome::IncorrectPassword)
        }
    }
}
