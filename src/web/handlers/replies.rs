//! Handlers for /api/replies/{board}.

use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::board::{BoardService, DeleteOutcome, ReportOutcome};
use crate::web::dto::{
    CreateReplyRequest, DeleteReplyRequest, ReportReplyRequest, ThreadQuery, ThreadResponse,
};
use crate::web::error::ApiError;

use super::{found, AppState, OUTCOME_INCORRECT_PASSWORD, OUTCOME_SUCCESS, OUTCOME_UPDATE_FAILED};

/// POST /api/replies/{board} - Append a reply, then redirect to its thread.
pub async fn create_reply(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    Json(req): Json<CreateReplyRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let service = BoardService::new(state.db.pool());
    let reply = service
        .create_reply(req.thread_id, &req.text, &req.delete_password)
        .await?
        .ok_or_else(|| ApiError::not_found("thread not found"))?;

    tracing::debug!(reply_id = reply.id, thread_id = req.thread_id, "Reply created");
    Ok(found(format!("/b/{board}/{}", req.thread_id)))
}

/// GET /api/replies/{board}?thread_id= - A thread with all of its replies.
pub async fn get_thread(
    State(state): State<Arc<AppState>>,
    Path(_board): Path<String>,
    Query(query): Query<ThreadQuery>,
) -> Result<Json<ThreadResponse>, ApiError> {
    let service = BoardService::new(state.db.pool());
    let view = service
        .thread_with_replies(query.thread_id)
        .await?
        .ok_or_else(|| ApiError::not_found("thread not found"))?;

    Ok(Json(ThreadResponse::from(view)))
}

/// PUT /api/replies/{board} - Report a reply.
pub async fn report_reply(
    State(state): State<Arc<AppState>>,
    Path(_board): Path<String>,
    Json(req): Json<ReportReplyRequest>,
) -> Result<&'static str, ApiError> {
    let service = BoardService::new(state.db.pool());
    match service.report_reply(req.thread_id, req.reply_id).await? {
        ReportOutcome::Reported => Ok(OUTCOME_SUCCESS),
        ReportOutcome::UpdateFailed => Ok(OUTCOME_UPDATE_FAILED),
    }
}

/// DELETE /api/replies/{board} - Tombstone a reply with its password.
pub async fn delete_reply(
    State(state): State<Arc<AppState>>,
    Path(_board): Path<String>,
    Json(req): Json<DeleteReplyRequest>,
) -> Result<&'static str, ApiError> {
    let service = BoardService::new(state.db.pool());
    match service
        .delete_reply(req.thread_id, req.reply_id, &req.delete_password)
        .await?
    {
        DeleteOutcome::Deleted => Ok(OUTCOME_SUCCESS),
        DeleteOutcome::IncorrectPassword => Ok(OUTCOME_INCORRECT_PASSWORD),
    }
}
