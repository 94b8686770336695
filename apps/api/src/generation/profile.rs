//! Profile analysis — fixed section scores for a LinkedIn profile URL.
//!
//! The URL is only a trigger; every analysis is the same literal report.

use serde::{Deserialize, Serialize};

use crate::generation::to_strings;

/// Form input for the profile panel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileRequest {
    pub profile_url: String,
}

/// Partial form edit sent with a submission. Absent fields keep the draft.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileUpdate {
    pub profile_url: Option<String>,
}

/// URL filled in by the "demo" action.
pub const DEMO_PROFILE_URL: &str = "https://linkedin.com/in/demo-profile";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileSection {
    Headline,
    Summary,
    Experience,
    Skills,
    Education,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionScore {
    pub section: ProfileSection,
    pub score: u32, // 0 – 100
    pub feedback: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileAnalysis {
    pub overall_score: u32,
    pub sections: Vec<SectionScore>,
    pub recommendations: Vec<String>,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}

pub fn generate(_request: &ProfileRequest) -> ProfileAnalysis {
    let section = |section, score, feedback: &str| SectionScore {
        section,
        score,
        feedback: feedback.to_string(),
    };

    ProfileAnalysis {
        overall_score: 78,
        sections: vec![
            section(
                ProfileSection::Headline,
                85,
                "Strong headline with clear value proposition",
            ),
            section(
                ProfileSection::Summary,
                72,
                "Good summary but could be more specific about achievements",
            ),
            section(
                ProfileSection::Experience,
                80,
                "Well-detailed experience section",
            ),
            section(
                ProfileSection::Skills,
                65,
                "Add more relevant skills and get endorsements",
            ),
            section(
                ProfileSection::Education,
                90,
                "Complete education information",
            ),
        ],
        recommendations: to_strings(&[
            "Add 3-5 more relevant skills to your profile",
            "Include quantified achievements in your summary",
            "Get recommendations from colleagues",
            "Update your profile photo to a professional headshot",
        ]),
        strengths: to_strings(&[
            "Clear professional headline",
            "Comprehensive work experience",
            "Strong educational background",
        ]),
        improvements: to_strings(&[
            "Expand skills section",
            "Add more specific achievements",
            "Increase network connections",
        ]),
    }
}
