//! Board domain: threads, replies, and the workflows over them.

mod repository;
mod service;
mod types;

pub use repository::ThreadRepository;
pub use service::{BoardService, DeleteOutcome, ReportOutcome};
pub use types::{
    NewReply, NewThread, Reply, Thread, ThreadSummary, ThreadView, REPLY_TOMBSTONE, REPLY_WINDOW,
    THREAD_WINDOW,
};
