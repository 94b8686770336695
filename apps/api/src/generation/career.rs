//! Career guidance — a three-phase roadmap with skills, resources and next steps.

use serde::{Deserialize, Serialize};

use crate::generation::to_strings;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CareerRequest {
    pub career_goals: String,
    #[serde(default)]
    pub current_role: String,
    #[serde(default)]
    pub experience: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CareerUpdate {
    pub career_goals: Option<String>,
    pub current_role: Option<String>,
    pub experience: Option<String>,
}

impl CareerRequest {
    /// Inputs filled in by the "use sample" action.
    pub fn sample() -> Self {
        Self {
            career_goals: "I want to become a Senior Full Stack Developer and eventually move into a technical leadership role".to_string(),
            current_role: "Full Stack Developer".to_string(),
            experience: "3 years".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ResourceKind {
    Course,
    Book,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoadmapPhase {
    pub phase: String,
    pub goals: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillPriority {
    pub skill: String,
    pub priority: Priority,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LearningResource {
    pub title: String,
    pub kind: ResourceKind,
    pub platform: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CareerGuidance {
    pub roadmap: Vec<RoadmapPhase>,
    pub skill_priorities: Vec<SkillPriority>,
    pub learning_resources: Vec<LearningResource>,
    pub networking_tips: Vec<String>,
    pub next_steps: Vec<String>,
}

pub fn generate(_request: &CareerRequest) -> CareerGuidance {
    let phase = |name: &str, goals: &[&str]| RoadmapPhase {
        phase: name.to_string(),
        goals: to_strings(goals),
    };
    let skill = |skill: &str, priority, reason: &str| SkillPriority {
        skill: skill.to_string(),
        priority,
        reason: reason.to_string(),
    };
    let resource = |title: &str, kind, platform: &str| LearningResource {
        title: title.to_string(),
        kind,
        platform: platform.to_string(),
    };

    CareerGuidance {
        roadmap: vec![
            phase(
                "Short-term (3-6 months)",
                &[
                    "Complete AWS Cloud Practitioner certification",
                    "Build 2-3 projects showcasing full-stack skills",
                    "Contribute to 1-2 open source projects",
                    "Expand professional network by 50+ connections",
                ],
            ),
            phase(
                "Medium-term (6-12 months)",
                &[
                    "Obtain AWS Solutions Architect Associate certification",
                    "Lead a team project or initiative",
                    "Speak at a local tech meetup or conference",
                    "Mentor 1-2 junior developers",
                ],
            ),
            phase(
                "Long-term (1-2 years)",
                &[
                    "Transition to Senior/Lead Developer role",
                    "Develop expertise in system architecture",
                    "Build a strong personal brand in tech",
                    "Consider starting a tech blog or YouTube channel",
                ],
            ),
        ],
        skill_priorities: vec![
            skill(
                "Cloud Architecture (AWS/Azure)",
                Priority::High,
                "Essential for senior roles",
            ),
            skill(
                "System Design",
                Priority::High,
                "Critical for leadership positions",
            ),
            skill(
                "Team Leadership",
                Priority::Medium,
                "Important for career progression",
            ),
            skill(
                "DevOps/CI-CD",
                Priority::Medium,
                "Valuable for full-stack expertise",
            ),
            skill(
                "Data Structures & Algorithms",
                Priority::Low,
                "Good for interview prep",
            ),
        ],
        learning_resources: vec![
            resource(
                "AWS Certified Solutions Architect Course",
                ResourceKind::Course,
                "A Cloud Guru",
            ),
            resource("System Design Interview", ResourceKind::Book, "Amazon"),
            resource("The Manager's Path", ResourceKind::Book, "O'Reilly"),
            resource("Docker & Kubernetes Course", ResourceKind::Course, "Udemy"),
        ],
        networking_tips: to_strings(&[
            "Join local tech meetups and developer communities",
            "Engage actively on LinkedIn with industry content",
            "Attend virtual conferences and webinars",
            "Connect with professionals in your target companies",
            "Participate in hackathons and coding challenges",
        ]),
        next_steps: to_strings(&[
            "Update LinkedIn profile with career objectives",
            "Start working on AWS certification immediately",
            "Identify 3-5 target companies for future applications",
            "Schedule informational interviews with senior developers",
            "Create a learning schedule and stick to it",
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roadmap_has_three_phases_of_four_goals() {
        let guidance = generate(&CareerRequest::sample());
        assert_eq!(guidance.roadmap.len(), 3);
        assert!(guidance.roadmap.iter().all(|p| p.goals.len() == 4));
        assert_eq!(guidance.roadmap[0].phase, "Short-term (3-6 months)");
        assert_eq!(guidance.roadmap[2].phase, "Long-term (1-2 years)");
    }

    #[test]
    fn test_skill_priorities_descend() {
        let guidance = generate(&CareerRequest::default());
        let priorities: Vec<Priority> = guidance
            .skill_priorities
            .iter()
            .map(|s| s.priority)
            .collect();
        assert_eq!(
            priorities,
            vec![
                Priority::High,
                Priority::High,
                Priority::Medium,
                Priority::Medium,
                Priority::Low
            ]
        );
    }

    #[test]
    fn test_guidance_ignores_inputs() {
        let custom = CareerRequest {
            career_goals: "Become a data engineer".to_string(),
            ..Default::default()
        };
        assert_eq!(generate(&custom), generate(&CareerRequest::sample()));
    }

    #[test]
    fn test_resource_kind_serializes_as_label() {
        let json = serde_json::to_value(&generate(&CareerRequest::default())).unwrap();
        assert_eq!(json["learning_resources"][1]["kind"], "Book");
        assert_eq!(json["skill_priorities"][0]["priority"], "High");
    }
}
