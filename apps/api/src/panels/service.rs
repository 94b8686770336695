//! Panel actions: submit, sample fills, chat send, copy.
//!
//! A submission is three steps: under the session lock, write the draft and
//! mark the panel pending; without the lock, wait out the simulated latency and
//! generate; under the lock again, store the result. A second submission that
//! arrives in between sees the pending flag and is rejected.

use std::time::Duration;

use tokio::time::Instant;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::chat::models::{ChatMessage, Sender, SUGGESTED_QUESTIONS};
use crate::errors::AppError;
use crate::generation::career::{self, CareerRequest, CareerUpdate};
use crate::generation::content::{self, ContentRequest, ContentSection, ContentUpdate, OptimizedContent};
use crate::generation::job_fit::{self, JobFitUpdate, SAMPLE_JOB_DESCRIPTION};
use crate::generation::profile::{self, ProfileUpdate, DEMO_PROFILE_URL};
use crate::latency::SimulatedLatency;
use crate::panels::copy::CopyResponse;
use crate::panels::panel::{CareerPanel, Draft, DraftUpdate, JobFitPanel, Panel, ProfilePanel};
use crate::panels::{Tab, Workspace};
use crate::state::AppState;

fn profile_panel(workspace: &mut Workspace) -> &mut ProfilePanel {
    &mut workspace.profile
}

fn job_fit_panel(workspace: &mut Workspace) -> &mut JobFitPanel {
    &mut workspace.job_fit
}

fn content_panel(workspace: &mut Workspace) -> &mut Panel<ContentRequest, OptimizedContent> {
    &mut workspace.content.form
}

fn career_panel(workspace: &mut Workspace) -> &mut CareerPanel {
    &mut workspace.career
}

async fn submit<U, R>(
    state: &AppState,
    session_id: Uuid,
    update: U,
    delay: Duration,
    panel: fn(&mut Workspace) -> &mut Panel<U::Draft, R>,
    generate: fn(&U::Draft) -> R,
) -> Result<(), AppError>
where
    U: DraftUpdate,
    R: Send,
{
    let inputs = state
        .sessions
        .update(session_id, |workspace| {
            let panel = panel(workspace);
            // a busy panel keeps the draft it is working on
            if !panel.pending() {
                update.apply(&mut panel.draft);
            }
            panel.begin()
        })
        .await?;

    info!("Session {session_id}: {} submitted", <U::Draft as Draft>::PANEL);

    let result = SimulatedLatency::new(delay)
        .defer(|| generate(&inputs))
        .await;

    state
        .sessions
        .update(session_id, |workspace| {
            panel(workspace).complete(result);
            Ok(())
        })
        .await?;

    debug!("Session {session_id}: {} completed", <U::Draft as Draft>::PANEL);
    Ok(())
}

pub async fn select_tab(state: &AppState, session_id: Uuid, tab: Tab) -> Result<(), AppError> {
    state
        .sessions
        .update(session_id, |workspace| {
            workspace.select(tab);
            Ok(())
        })
        .await
}

// ────────────────────────────────────────────────────────────────────────────
// Profile
// ────────────────────────────────────────────────────────────────────────────

/// Applies `update` to the profile draft and analyzes the result.
pub async fn analyze_profile(
    state: &AppState,
    session_id: Uuid,
    update: ProfileUpdate,
) -> Result<(), AppError> {
    submit(
        state,
        session_id,
        update,
        state.config.latency.profile,
        profile_panel,
        profile::generate,
    )
    .await
}

/// Fills the demo URL and analyzes it in one step.
pub async fn analyze_demo_profile(state: &AppState, session_id: Uuid) -> Result<(), AppError> {
    let update = ProfileUpdate {
        profile_url: Some(DEMO_PROFILE_URL.to_string()),
    };
    analyze_profile(state, session_id, update).await
}

// ────────────────────────────────────────────────────────────────────────────
// Job fit
// ────────────────────────────────────────────────────────────────────────────

pub async fn analyze_job_fit(
    state: &AppState,
    session_id: Uuid,
    update: JobFitUpdate,
) -> Result<(), AppError> {
    submit(
        state,
        session_id,
        update,
        state.config.latency.job_fit,
        job_fit_panel,
        job_fit::generate,
    )
    .await
}

pub async fn fill_job_fit_sample(state: &AppState, session_id: Uuid) -> Result<(), AppError> {
    state
        .sessions
        .update(session_id, |workspace| {
            workspace.job_fit.draft.job_description = SAMPLE_JOB_DESCRIPTION.to_string();
            Ok(())
        })
        .await
}

// ────────────────────────────────────────────────────────────────────────────
// Content
// ────────────────────────────────────────────────────────────────────────────

pub async fn optimize_content(
    state: &AppState,
    session_id: Uuid,
    update: ContentUpdate,
) -> Result<(), AppError> {
    submit(
        state,
        session_id,
        update,
        state.config.latency.content,
        content_panel,
        content::generate,
    )
    .await
}

/// Switches to `section` when given, then fills that section's sample text.
pub async fn fill_content_sample(
    state: &AppState,
    session_id: Uuid,
    section: Option<ContentSection>,
) -> Result<(), AppError> {
    state
        .sessions
        .update(session_id, |workspace| {
            let draft = &mut workspace.content.form.draft;
            if let Some(section) = section {
                draft.section = section;
            }
            draft.current_content = draft.section.sample().to_string();
            Ok(())
        })
        .await
}

/// Copies the displayed optimized content and lights the "Copied!" badge.
pub async fn copy_content(state: &AppState, session_id: Uuid) -> Result<CopyResponse, AppError> {
    let now = Instant::now();
    let clipboard = state.clipboard.clone();

    state
        .sessions
        .update(session_id, |workspace| {
            let text = workspace
                .content
                .form
                .result()
                .map(|r| r.text.clone())
                .ok_or_else(|| AppError::Validation("There is no optimized content to copy".into()))?;

            clipboard.write_text(session_id, &text)?;
            workspace.content.copy.mark(now);

            Ok(CopyResponse { text, copied: true })
        })
        .await
}

// ────────────────────────────────────────────────────────────────────────────
// Career
// ────────────────────────────────────────────────────────────────────────────

pub async fn generate_career_plan(
    state: &AppState,
    session_id: Uuid,
    update: CareerUpdate,
) -> Result<(), AppError> {
    submit(
        state,
        session_id,
        update,
        state.config.latency.career,
        career_panel,
        career::generate,
    )
    .await
}

pub async fn fill_career_sample(state: &AppState, session_id: Uuid) -> Result<(), AppError> {
    state
        .sessions
        .update(session_id, |workspace| {
            workspace.career.draft = CareerRequest::sample();
            Ok(())
        })
        .await
}

// ────────────────────────────────────────────────────────────────────────────
// Chat
// ────────────────────────────────────────────────────────────────────────────

/// Sends `text` (or the current draft) and waits for the coach's reply.
pub async fn send_chat_message(
    state: &AppState,
    session_id: Uuid,
    text: Option<String>,
) -> Result<(), AppError> {
    let message = state
        .sessions
        .update(session_id, |workspace| {
            if let Some(text) = text {
                workspace.chat.draft = text;
            }
            workspace.chat.send()
        })
        .await?;

    info!("Session {session_id}: chat message sent");

    SimulatedLatency::new(state.config.latency.chat)
        .defer(|| ())
        .await;

    let reply = match state.responder.respond(&message).await {
        Ok(reply) => reply,
        Err(e) => {
            warn!("Session {session_id}: chat responder failed");
            state
                .sessions
                .update(session_id, |workspace| {
                    workspace.chat.abandon();
                    Ok(())
                })
                .await?;
            return Err(e);
        }
    };

    state
        .sessions
        .update(session_id, |workspace| {
            workspace
                .chat
                .receive(ChatMessage::new(Sender::Assistant, reply));
            Ok(())
        })
        .await
}

pub async fn fill_suggested_question(
    state: &AppState,
    session_id: Uuid,
    index: usize,
) -> Result<(), AppError> {
    let question = SUGGESTED_QUESTIONS
        .get(index)
        .ok_or_else(|| AppError::NotFound(format!("Suggested question {index} not found")))?;

    state
        .sessions
        .update(session_id, |workspace| {
            workspace.chat.draft = question.to_string();
            Ok(())
        })
        .await
}
