//! Request handlers for the board API.

mod replies;
mod threads;

pub use replies::{create_reply, delete_reply, get_thread, report_reply};
pub use threads::{create_thread, delete_thread, list_threads, report_thread};

use axum::http::{header, StatusCode};
use axum::response::IntoResponse;

use crate::Database;

/// Plain-text outcome of a successful mutation.
pub(crate) const OUTCOME_SUCCESS: &str = "success";
/// Plain-text outcome of a failed report.
pub(crate) const OUTCOME_UPDATE_FAILED: &str = "update failed";
/// Plain-text outcome of a failed password-gated delete.
pub(crate) const OUTCOME_INCORRECT_PASSWORD: &str = "incorrect password";

/// Shared application state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    /// Database handle, constructed once at startup.
    pub db: Database,
}

impl AppState {
    /// Create application state over the given database.
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

/// A literal `302 Found` redirect.
///
/// axum's `Redirect` helpers emit 303/307; the board contract is 302.
pub(crate) fn found(location: String) -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, location)])
}
