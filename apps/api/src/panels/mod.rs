//! Tab container: the five panels of one session and which one is showing.
//!
//! Panels never share state. Switching tabs only changes `active`; results,
//! drafts and the chat log survive navigation for the life of the session.

pub mod copy;
pub mod handlers;
pub mod panel;
pub mod service;
pub mod session;
pub mod view;

use serde::{Deserialize, Serialize};

use crate::panels::panel::{CareerPanel, ChatPanel, ContentPanel, JobFitPanel, ProfilePanel};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    Profile,
    JobFit,
    Content,
    Career,
    Chat,
}

impl Tab {
    pub const ALL: [Tab; 5] = [Tab::Profile, Tab::JobFit, Tab::Content, Tab::Career, Tab::Chat];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Profile => "Profile Analysis",
            Tab::JobFit => "Job Fit",
            Tab::Content => "Content Optimization",
            Tab::Career => "Career Guidance",
            Tab::Chat => "AI Chat",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Workspace {
    active: Tab,
    pub profile: ProfilePanel,
    pub job_fit: JobFitPanel,
    pub content: ContentPanel,
    pub career: CareerPanel,
    pub chat: ChatPanel,
}

impl Workspace {
    pub fn active(&self) -> Tab {
        self.active
    }

    /// Any tab may be selected at any time.
    pub fn select(&mut self, tab: Tab) {
        self.active = tab;
    }
}
