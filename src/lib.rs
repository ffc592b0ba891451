//! Anonymous message board REST API.
//!
//! Clients create threads and replies on named boards, report abusive
//! content, and delete their own content with a shared per-post password.

pub mod board;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod password;
pub mod web;

pub use board::{
    BoardService, DeleteOutcome, NewReply, NewThread, Reply, ReportOutcome, Thread,
    ThreadRepository, ThreadSummary, ThreadView, REPLY_TOMBSTONE, REPLY_WINDOW, THREAD_WINDOW,
};
pub use config::Config;
pub use db::{Database, DbPool};
pub use error::{BoardError, Result};
pub use password::{hash_delete_password, verify_delete_password, PasswordError};
pub use web::WebServer;
