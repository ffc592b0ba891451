//! Handlers for /api/threads/{board}.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::board::{BoardService, DeleteOutcome, ReportOutcome};
use crate::web::dto::{
    CreateThreadRequest, DeleteThreadRequest, ReportThreadRequest, ThreadSummaryResponse,
};
use crate::web::error::ApiError;

use super::{found, AppState, OUTCOME_INCORRECT_PASSWORD, OUTCOME_SUCCESS, OUTCOME_UPDATE_FAILED};

/// POST /api/threads/{board} - Create a thread, then redirect to its board.
pub async fn create_thread(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    Json(req): Json<CreateThreadRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let service = BoardService::new(state.db.pool());
    let thread = service
        .create_thread(&board, &req.text, &req.delete_password)
        .await?;

    tracing::debug!(thread_id = thread.id, board = %board, "Thread created");
    Ok(found(format!("/b/{board}")))
}

/// GET /api/threads/{board} - The recent-threads listing.
pub async fn list_threads(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
) -> Result<Json<Vec<ThreadSummaryResponse>>, ApiError> {
    let service = BoardService::new(state.db.pool());
    let summaries = service.recent_threads(&board).await?;

    Ok(Json(
        summaries.into_iter().map(ThreadSummaryResponse::from).collect(),
    ))
}

/// PUT /api/threads/{board} - Report a thread.
pub async fn report_thread(
    State(state): State<Arc<AppState>>,
    Path(_board): Path<String>,
    Json(req): Json<ReportThreadRequest>,
) -> Result<&'static str, ApiError> {
    let service = BoardService::new(state.db.pool());
    match service.report_thread(req.thread_id).await? {
        ReportOutcome::Reported => Ok(OUTCOME_SUCCESS),
        ReportOutcome::UpdateFailed => Ok(OUTCOME_UPDATE_FAILED),
    }
}

/// DELETE /api/threads/{board} - Delete a thread with its password.
pub async fn delete_thread(
    State(state): State<Arc<AppState>>,
    Path(_board): Path<String>,
    Json(req): Json<DeleteThreadRequest>,
) -> Result<&'static str, ApiError> {
    let service = BoardService::new(state.db.pool());
    match service
        .delete_thread(req.thread_id, &req.delete_password)
        .await?
    {
        DeleteOutcome::Deleted => Ok(OUTCOME_SUCCESS),
        DeleteOutcome::IncorrectPassword => Ok(OUTCOME_INCORRECT_PASSWORD),
    }
}
