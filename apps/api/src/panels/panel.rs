//! Per-panel form state: draft input, in-flight flag, last result.

use crate::chat::models::{ChatLog, ChatMessage, Sender};
use crate::errors::AppError;
use crate::generation::career::{CareerGuidance, CareerRequest, CareerUpdate};
use crate::generation::content::{ContentRequest, ContentUpdate, OptimizedContent};
use crate::generation::job_fit::{JobFitReport, JobFitRequest, JobFitUpdate};
use crate::generation::profile::{ProfileAnalysis, ProfileRequest, ProfileUpdate};
use crate::panels::copy::CopyIndicator;

/// Form input of a panel: which field gates submission and how the
/// submit button is labelled.
pub trait Draft {
    const PANEL: &'static str;
    const ACTION: &'static str;
    const BUSY_ACTION: &'static str;

    /// Name of the required field when it is blank.
    fn missing_field(&self) -> Option<&'static str>;
}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

impl Draft for ProfileRequest {
    const PANEL: &'static str = "profile";
    const ACTION: &'static str = "Analyze";
    const BUSY_ACTION: &'static str = "Analyzing...";

    fn missing_field(&self) -> Option<&'static str> {
        blank(&self.profile_url).then_some("profile_url")
    }
}

impl Draft for JobFitRequest {
    const PANEL: &'static str = "job_fit";
    const ACTION: &'static str = "Analyze Fit";
    const BUSY_ACTION: &'static str = "Analyzing...";

    fn missing_field(&self) -> Option<&'static str> {
        blank(&self.job_description).then_some("job_description")
    }
}

impl Draft for ContentRequest {
    const PANEL: &'static str = "content";
    const ACTION: &'static str = "Optimize Content";
    const BUSY_ACTION: &'static str = "Optimizing...";

    fn missing_field(&self) -> Option<&'static str> {
        blank(&self.current_content).then_some("current_content")
    }
}

impl Draft for CareerRequest {
    const PANEL: &'static str = "career";
    const ACTION: &'static str = "Generate Career Plan";
    const BUSY_ACTION: &'static str = "Generating Plan...";

    fn missing_field(&self) -> Option<&'static str> {
        blank(&self.career_goals).then_some("career_goals")
    }
}

/// Form edits carried by a submission. Fields that are present overwrite the
/// draft; the merged draft is what gets validated and submitted.
pub trait DraftUpdate: Send {
    type Draft: Draft + Clone + Send;

    fn apply(self, draft: &mut Self::Draft);
}

fn overwrite<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

impl DraftUpdate for ProfileUpdate {
    type Draft = ProfileRequest;

    fn apply(self, draft: &mut ProfileRequest) {
        overwrite(&mut draft.profile_url, self.profile_url);
    }
}

impl DraftUpdate for JobFitUpdate {
    type Draft = JobFitRequest;

    fn apply(self, draft: &mut JobFitRequest) {
        overwrite(&mut draft.job_description, self.job_description);
    }
}

impl DraftUpdate for ContentUpdate {
    type Draft = ContentRequest;

    fn apply(self, draft: &mut ContentRequest) {
        overwrite(&mut draft.section, self.section);
        overwrite(&mut draft.current_content, self.current_content);
        overwrite(&mut draft.target_role, self.target_role);
    }
}

impl DraftUpdate for CareerUpdate {
    type Draft = CareerRequest;

    fn apply(self, draft: &mut CareerRequest) {
        overwrite(&mut draft.career_goals, self.career_goals);
        overwrite(&mut draft.current_role, self.current_role);
        overwrite(&mut draft.experience, self.experience);
    }
}

/// One analysis panel. At most one request is in flight; a completed result
/// stays until the next completion replaces it.
#[derive(Debug, Clone)]
pub struct Panel<D, R> {
    pub draft: D,
    pending: bool,
    result: Option<R>,
}

impl<D: Default, R> Default for Panel<D, R> {
    fn default() -> Self {
        Self {
            draft: D::default(),
            pending: false,
            result: None,
        }
    }
}

impl<D: Draft + Clone, R> Panel<D, R> {
    pub fn pending(&self) -> bool {
        self.pending
    }

    pub fn result(&self) -> Option<&R> {
        self.result.as_ref()
    }

    /// Mirrors the submit button's enabled state.
    pub fn can_submit(&self) -> bool {
        !self.pending && self.draft.missing_field().is_none()
    }

    /// Marks the panel in flight and hands back the inputs to generate from.
    pub fn begin(&mut self) -> Result<D, AppError> {
        if self.pending {
            return Err(AppError::PanelBusy(format!(
                "{} already has a request in flight",
                D::PANEL
            )));
        }
        if let Some(field) = self.draft.missing_field() {
            return Err(AppError::Validation(format!("{field} cannot be empty")));
        }
        self.pending = true;
        Ok(self.draft.clone())
    }

    pub fn complete(&mut self, result: R) {
        self.result = Some(result);
        self.pending = false;
    }

    pub fn action_label(&self) -> &'static str {
        if self.pending {
            D::BUSY_ACTION
        } else {
            D::ACTION
        }
    }
}

pub type ProfilePanel = Panel<ProfileRequest, ProfileAnalysis>;
pub type JobFitPanel = Panel<JobFitRequest, JobFitReport>;
pub type CareerPanel = Panel<CareerRequest, CareerGuidance>;

#[derive(Debug, Clone, Default)]
pub struct ContentPanel {
    pub form: Panel<ContentRequest, OptimizedContent>,
    pub copy: CopyIndicator,
}

/// Chat panel. `typing` plays the role of `pending`.
#[derive(Debug, Clone, Default)]
pub struct ChatPanel {
    pub draft: String,
    typing: bool,
    log: ChatLog,
}

impl ChatPanel {
    pub fn typing(&self) -> bool {
        self.typing
    }

    pub fn log(&self) -> &ChatLog {
        &self.log
    }

    pub fn can_send(&self) -> bool {
        !self.typing && !blank(&self.draft)
    }

    /// Records the user's message, clears the draft and starts "typing".
    /// Returns the text to answer.
    pub fn send(&mut self) -> Result<String, AppError> {
        if self.typing {
            return Err(AppError::PanelBusy(
                "chat is still answering the previous message".to_string(),
            ));
        }
        if blank(&self.draft) {
            return Err(AppError::Validation("message cannot be empty".to_string()));
        }
        let text = std::mem::take(&mut self.draft);
        self.log.push(ChatMessage::new(Sender::User, text.clone()));
        self.typing = true;
        Ok(text)
    }

    pub fn receive(&mut self, reply: ChatMessage) {
        self.log.push(reply);
        self.typing = false;
    }

    /// Stops "typing" without a reply.
    pub fn abandon(&mut self) {
        self.typing = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::profile;

    fn profile_panel(url: &str) -> ProfilePanel {
        ProfilePanel {
            draft: ProfileRequest {
                profile_url: url.to_string(),
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_update_keeps_absent_fields() {
        let mut draft = CareerRequest::sample();
        CareerUpdate {
            experience: Some("5 years".to_string()),
            ..Default::default()
        }
        .apply(&mut draft);

        assert_eq!(draft.experience, "5 years");
        assert_eq!(draft.current_role, "Full Stack Developer");
        assert!(draft.missing_field().is_none());
    }

    #[test]
    fn test_empty_update_leaves_draft_untouched() {
        let mut draft = JobFitRequest {
            job_description: "Rust engineer".to_string(),
        };
        JobFitUpdate::default().apply(&mut draft);
        assert_eq!(draft.job_description, "Rust engineer");
    }

    #[test]
    fn test_blank_draft_cannot_submit() {
        for url in ["", "   ", "\n\t"] {
            let mut panel = profile_panel(url);
            assert!(!panel.can_submit());
            assert!(matches!(panel.begin(), Err(AppError::Validation(_))));
            assert!(!panel.pending());
        }
    }

    #[test]
    fn test_begin_sets_pending_and_blocks_second_submit() {
        let mut panel = profile_panel("https://linkedin.com/in/x");
        let draft = panel.begin().unwrap();
        assert_eq!(draft.profile_url, "https://linkedin.com/in/x");
        assert!(panel.pending());
        assert!(!panel.can_submit());
        assert_eq!(panel.action_label(), "Analyzing...");
        assert!(matches!(panel.begin(), Err(AppError::PanelBusy(_))));
    }

    #[test]
    fn test_complete_assigns_result_and_clears_pending() {
        let mut panel = profile_panel("https://linkedin.com/in/x");
        let draft = panel.begin().unwrap();
        panel.complete(profile::generate(&draft));

        assert!(!panel.pending());
        assert_eq!(panel.result().map(|r| r.overall_score), Some(78));
        assert_eq!(panel.action_label(), "Analyze");
    }

    #[test]
    fn test_chat_send_moves_draft_into_log() {
        let mut chat = ChatPanel {
            draft: "hello".to_string(),
            ..Default::default()
        };
        let text = chat.send().unwrap();

        assert_eq!(text, "hello");
        assert!(chat.draft.is_empty());
        assert!(chat.typing());
        let last = chat.log().messages().last().unwrap();
        assert_eq!(last.sender, Sender::User);
        assert_eq!(last.content, "hello");
    }

    #[test]
    fn test_chat_rejects_while_typing() {
        let mut chat = ChatPanel {
            draft: "one".to_string(),
            ..Default::default()
        };
        chat.send().unwrap();
        chat.draft = "two".to_string();
        assert!(!chat.can_send());
        assert!(matches!(chat.send(), Err(AppError::PanelBusy(_))));

        chat.receive(ChatMessage::new(Sender::Assistant, "reply"));
        assert!(chat.can_send());
        assert_eq!(chat.log().messages().len(), 3);
    }

    #[test]
    fn test_chat_rejects_whitespace() {
        let mut chat = ChatPanel {
            draft: "   ".to_string(),
            ..Default::default()
        };
        assert!(matches!(chat.send(), Err(AppError::Validation(_))));
        assert_eq!(chat.log().messages().len(), 1);
    }
}
