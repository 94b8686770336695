//! Axum route handlers for sessions and their panels.
//!
//! Every mutating handler answers with the refreshed `WorkspaceView`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tokio::time::Instant;
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::career::CareerUpdate;
use crate::generation::content::{ContentSection, ContentUpdate, SectionInfo, SECTIONS};
use crate::generation::job_fit::JobFitUpdate;
use crate::generation::profile::ProfileUpdate;
use crate::panels::copy::CopyResponse;
use crate::panels::service;
use crate::panels::view::{render_workspace, ChatView, WorkspaceView};
use crate::panels::Tab;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SelectTabRequest {
    pub tab: Tab,
}

#[derive(Debug, Default, Deserialize)]
pub struct ContentSampleRequest {
    pub section: Option<ContentSection>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SendMessageRequest {
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ClipboardResponse {
    pub text: Option<String>,
}

async fn workspace_view(state: &AppState, session_id: Uuid) -> Result<Json<WorkspaceView>, AppError> {
    let now = Instant::now();
    let hold = state.config.copied_indicator;
    let view = state
        .sessions
        .read(session_id, |workspace| {
            render_workspace(session_id, workspace, now, hold)
        })
        .await?;
    Ok(Json(view))
}

/// Submission bodies are optional; an absent body submits the stored draft.
fn form_update<U: Default>(body: Option<Json<U>>) -> U {
    body.map(|Json(update)| update).unwrap_or_default()
}

// ────────────────────────────────────────────────────────────────────────────
// Sessions and tabs
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<WorkspaceView>), AppError> {
    let session_id = state.sessions.create().await;
    let view = workspace_view(&state, session_id).await?;
    Ok((StatusCode::CREATED, view))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<WorkspaceView>, AppError> {
    workspace_view(&state, session_id).await
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if !state.sessions.remove(session_id).await {
        return Err(AppError::NotFound(format!("Session {session_id} not found")));
    }
    state.clipboard.forget(session_id);
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/sessions/:id/tab
pub async fn handle_select_tab(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<SelectTabRequest>,
) -> Result<Json<WorkspaceView>, AppError> {
    service::select_tab(&state, session_id, request.tab).await?;
    workspace_view(&state, session_id).await
}

// ────────────────────────────────────────────────────────────────────────────
// Profile / job fit / career
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions/:id/profile/analyze
pub async fn handle_analyze_profile(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    body: Option<Json<ProfileUpdate>>,
) -> Result<Json<WorkspaceView>, AppError> {
    service::analyze_profile(&state, session_id, form_update(body)).await?;
    workspace_view(&state, session_id).await
}

/// POST /api/v1/sessions/:id/profile/demo
pub async fn handle_demo_profile(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<WorkspaceView>, AppError> {
    service::analyze_demo_profile(&state, session_id).await?;
    workspace_view(&state, session_id).await
}

/// POST /api/v1/sessions/:id/job-fit/analyze
pub async fn handle_analyze_job_fit(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    body: Option<Json<JobFitUpdate>>,
) -> Result<Json<WorkspaceView>, AppError> {
    service::analyze_job_fit(&state, session_id, form_update(body)).await?;
    workspace_view(&state, session_id).await
}

/// POST /api/v1/sessions/:id/job-fit/sample
pub async fn handle_job_fit_sample(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<WorkspaceView>, AppError> {
    service::fill_job_fit_sample(&state, session_id).await?;
    workspace_view(&state, session_id).await
}

/// POST /api/v1/sessions/:id/career/generate
pub async fn handle_generate_career(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    body: Option<Json<CareerUpdate>>,
) -> Result<Json<WorkspaceView>, AppError> {
    service::generate_career_plan(&state, session_id, form_update(body)).await?;
    workspace_view(&state, session_id).await
}

/// POST /api/v1/sessions/:id/career/sample
pub async fn handle_career_sample(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<WorkspaceView>, AppError> {
    service::fill_career_sample(&state, session_id).await?;
    workspace_view(&state, session_id).await
}

// ────────────────────────────────────────────────────────────────────────────
// Content
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/content/sections
pub async fn handle_content_sections() -> Json<&'static [SectionInfo]> {
    Json(&SECTIONS)
}

/// POST /api/v1/sessions/:id/content/optimize
pub async fn handle_optimize_content(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    body: Option<Json<ContentUpdate>>,
) -> Result<Json<WorkspaceView>, AppError> {
    service::optimize_content(&state, session_id, form_update(body)).await?;
    workspace_view(&state, session_id).await
}

/// POST /api/v1/sessions/:id/content/sample
pub async fn handle_content_sample(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    body: Option<Json<ContentSampleRequest>>,
) -> Result<Json<WorkspaceView>, AppError> {
    let section = form_update(body).section;
    service::fill_content_sample(&state, session_id, section).await?;
    workspace_view(&state, session_id).await
}

/// POST /api/v1/sessions/:id/content/copy
pub async fn handle_copy_content(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<CopyResponse>, AppError> {
    Ok(Json(service::copy_content(&state, session_id).await?))
}

/// GET /api/v1/sessions/:id/content/clipboard
pub async fn handle_read_clipboard(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<ClipboardResponse>, AppError> {
    // 404 for unknown sessions rather than an empty clipboard
    state.sessions.read(session_id, |_| ()).await?;
    let text = state.clipboard.read_text(session_id)?;
    Ok(Json(ClipboardResponse { text }))
}

// ────────────────────────────────────────────────────────────────────────────
// Chat
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/sessions/:id/chat
pub async fn handle_get_chat(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<ChatView>, AppError> {
    let view = state
        .sessions
        .read(session_id, |workspace| ChatView::from(&workspace.chat))
        .await?;
    Ok(Json(view))
}

/// POST /api/v1/sessions/:id/chat/messages
///
/// Responds once the coach's reply has been appended.
pub async fn handle_send_message(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    body: Option<Json<SendMessageRequest>>,
) -> Result<Json<ChatView>, AppError> {
    service::send_chat_message(&state, session_id, form_update(body).text).await?;
    handle_get_chat(State(state), Path(session_id)).await
}

/// POST /api/v1/sessions/:id/chat/suggested/:index
pub async fn handle_suggested_question(
    State(state): State<AppState>,
    Path((session_id, index)): Path<(Uuid, usize)>,
) -> Result<Json<ChatView>, AppError> {
    service::fill_suggested_question(&state, session_id, index).await?;
    handle_get_chat(State(state), Path(session_id)).await
}
