//! Renders session state into what a client draws: button states and
//! labels, the active tab, results, and the chat transcript.

use std::time::Duration;

use serde::Serialize;
use tokio::time::Instant;
use uuid::Uuid;

use crate::chat::models::{ChatMessage, SUGGESTED_QUESTIONS};
use crate::generation::career::{CareerGuidance, CareerRequest};
use crate::generation::content::{ContentRequest, OptimizedContent, SectionInfo, SECTIONS};
use crate::generation::job_fit::{JobFitReport, JobFitRequest};
use crate::generation::profile::{ProfileAnalysis, ProfileRequest};
use crate::panels::panel::{ChatPanel, ContentPanel, Draft, Panel};
use crate::panels::{Tab, Workspace};

#[derive(Debug, Serialize)]
pub struct TabView {
    pub id: Tab,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Serialize)]
pub struct PanelView<D, R> {
    pub draft: D,
    pub pending: bool,
    pub submit_enabled: bool,
    pub action_label: &'static str,
    pub result: Option<R>,
}

impl<D: Draft + Clone, R: Clone> From<&Panel<D, R>> for PanelView<D, R> {
    fn from(panel: &Panel<D, R>) -> Self {
        Self {
            draft: panel.draft.clone(),
            pending: panel.pending(),
            submit_enabled: panel.can_submit(),
            action_label: panel.action_label(),
            result: panel.result().cloned(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ContentView {
    #[serde(flatten)]
    pub form: PanelView<ContentRequest, OptimizedContent>,
    pub sections: &'static [SectionInfo],
    pub copy_enabled: bool,
    pub copied: bool,
    pub copy_label: &'static str,
}

impl ContentView {
    pub fn render(panel: &ContentPanel, now: Instant, hold: Duration) -> Self {
        Self {
            form: PanelView::from(&panel.form),
            sections: &SECTIONS,
            copy_enabled: panel.form.result().is_some(),
            copied: panel.copy.is_lit(now, hold),
            copy_label: panel.copy.label(now, hold),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ChatView {
    pub draft: String,
    pub typing: bool,
    pub send_enabled: bool,
    pub messages: Vec<ChatMessage>,
    pub suggested_questions: Vec<&'static str>,
}

impl From<&ChatPanel> for ChatView {
    fn from(chat: &ChatPanel) -> Self {
        let suggested_questions = if chat.log().offers_suggestions() {
            SUGGESTED_QUESTIONS.to_vec()
        } else {
            Vec::new()
        };

        Self {
            draft: chat.draft.clone(),
            typing: chat.typing(),
            send_enabled: chat.can_send(),
            messages: chat.log().messages().to_vec(),
            suggested_questions,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct WorkspaceView {
    pub session_id: Uuid,
    pub active_tab: Tab,
    pub tabs: Vec<TabView>,
    pub profile: PanelView<ProfileRequest, ProfileAnalysis>,
    pub job_fit: PanelView<JobFitRequest, JobFitReport>,
    pub content: ContentView,
    pub career: PanelView<CareerRequest, CareerGuidance>,
    pub chat: ChatView,
}

pub fn render_workspace(
    session_id: Uuid,
    workspace: &Workspace,
    now: Instant,
    copied_hold: Duration,
) -> WorkspaceView {
    let active = workspace.active();

    WorkspaceView {
        session_id,
        active_tab: active,
        tabs: Tab::ALL
            .iter()
            .map(|&tab| TabView {
                id: tab,
                label: tab.label(),
                active: tab == active,
            })
            .collect(),
        profile: PanelView::from(&workspace.profile),
        job_fit: PanelView::from(&workspace.job_fit),
        content: ContentView::render(&workspace.content, now, copied_hold),
        career: PanelView::from(&workspace.career),
        chat: ChatView::from(&workspace.chat),
    }
}
