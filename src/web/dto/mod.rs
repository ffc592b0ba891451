//! Data transfer objects for the board API.

mod request;
mod response;

pub use request::{
    CreateReplyRequest, CreateThreadRequest, DeleteReplyRequest, DeleteThreadRequest,
    ReportReplyRequest, ReportThreadRequest, ThreadQuery,
};
pub use response::{ReplyResponse, ThreadResponse, ThreadSummaryResponse};
