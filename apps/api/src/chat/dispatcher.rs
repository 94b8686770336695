//! Keyword dispatcher — picks a canned coach reply for a chat message.
//!
//! Rules are evaluated in table order and the first match wins. A rule is a
//! conjunction of keyword groups; a group matches when the lowercased message
//! contains any of its keywords. Messages no rule recognizes get one of the
//! `FALLBACKS`, chosen through an injected [`Entropy`] source.

use rand::Rng;

use crate::chat::responses::{
    FALLBACKS, HEADLINE_TIPS, INTERVIEW_PREPARATION, JOB_SEARCH_STRATEGY, SKILL_DEVELOPMENT,
};

/// Source of the uniform draw used by the fallback branch.
pub trait Entropy: Send + Sync {
    /// Returns an index in `0..len`. `len` is never zero.
    fn pick(&self, len: usize) -> usize;
}

/// Draws from the thread-local RNG.
pub struct ThreadEntropy;

impl Entropy for ThreadEntropy {
    fn pick(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// A reply intent recognized by the rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Headline,
    JobSearch,
    SkillDevelopment,
    Interview,
}

struct Rule {
    intent: Intent,
    /// Every group must match; within a group any keyword suffices.
    all_of: &'static [&'static [&'static str]],
    response: &'static str,
}

// Order is significant: "interview" + "job search" resolves to JobSearch.
const RULES: &[Rule] = &[
    Rule {
        intent: Intent::Headline,
        all_of: &[&["linkedin"], &["headline"]],
        response: HEADLINE_TIPS,
    },
    Rule {
        intent: Intent::JobSearch,
        all_of: &[&["job"], &["search", "hunting"]],
        response: JOB_SEARCH_STRATEGY,
    },
    Rule {
        intent: Intent::SkillDevelopment,
        all_of: &[&["skill"], &["learn", "develop"]],
        response: SKILL_DEVELOPMENT,
    },
    Rule {
        intent: Intent::Interview,
        all_of: &[&["interview"]],
        response: INTERVIEW_PREPARATION,
    },
];

impl Rule {
    fn matches(&self, normalized: &str) -> bool {
        self.all_of
            .iter()
            .all(|group| group.iter().any(|kw| normalized.contains(kw)))
    }
}

/// Returns the intent of the first matching rule, if any.
pub fn classify(input: &str) -> Option<Intent> {
    let normalized = input.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.matches(&normalized))
        .map(|rule| rule.intent)
}

/// Selects the reply for `input`. Deterministic unless no rule matches.
pub fn select_response(input: &str, entropy: &dyn Entropy) -> &'static str {
    let normalized = input.to_lowercase();
    match RULES.iter().find(|rule| rule.matches(&normalized)) {
        Some(rule) => rule.response,
        None => FALLBACKS[entropy.pick(FALLBACKS.len()) % FALLBACKS.len()],
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Always draws the same index.
    pub(crate) struct FixedEntropy(pub usize);

    impl Entropy for FixedEntropy {
        fn pick(&self, _len: usize) -> usize {
            self.0
        }
    }

    #[test]
    fn test_headline_rule_is_case_insensitive() {
        for input in [
            "How can I improve my LinkedIn headline?",
            "LINKEDIN HEADLINE",
            "headline for linkedin please",
        ] {
            assert_eq!(select_response(input, &FixedEntropy(0)), HEADLINE_TIPS);
        }
    }

    #[test]
    fn test_headline_needs_both_keywords() {
        assert_ne!(
            select_response("my linkedin profile", &FixedEntropy(0)),
            HEADLINE_TIPS
        );
        assert_ne!(
            select_response("a newspaper headline", &FixedEntropy(0)),
            HEADLINE_TIPS
        );
    }

    #[test]
    fn test_job_search_accepts_hunting() {
        assert_eq!(classify("Tips for job hunting?"), Some(Intent::JobSearch));
        assert_eq!(
            classify("What's the best job search strategy?"),
            Some(Intent::JobSearch)
        );
    }

    #[test]
    fn test_skill_rule_accepts_learn_or_develop() {
        assert_eq!(
            classify("What skills should I learn for career growth?"),
            Some(Intent::SkillDevelopment)
        );
        assert_eq!(
            classify("How do I develop new skills"),
            Some(Intent::SkillDevelopment)
        );
        assert_eq!(classify("rate my skills"), None);
    }

    #[test]
    fn test_interview_example_returns_preparation_text() {
        assert_eq!(
            select_response("How do I prepare for technical interviews?", &FixedEntropy(2)),
            INTERVIEW_PREPARATION
        );
    }

    #[test]
    fn test_job_search_precedes_interview() {
        let input = "Interview prep during my job search";
        assert_eq!(classify(input), Some(Intent::JobSearch));
        assert_eq!(select_response(input, &FixedEntropy(0)), JOB_SEARCH_STRATEGY);
    }

    #[test]
    fn test_headline_precedes_everything() {
        let input = "linkedin headline for my job search before the interview";
        assert_eq!(classify(input), Some(Intent::Headline));
    }

    #[test]
    fn test_unmatched_input_uses_entropy_index() {
        for (i, expected) in FALLBACKS.iter().enumerate() {
            assert_eq!(select_response("hello there", &FixedEntropy(i)), *expected);
        }
    }

    #[test]
    fn test_out_of_range_entropy_wraps() {
        assert_eq!(select_response("hello", &FixedEntropy(4)), FALLBACKS[1]);
    }

    #[test]
    fn test_thread_entropy_stays_in_fallback_set() {
        for _ in 0..50 {
            let reply = select_response("tell me something", &ThreadEntropy);
            assert!(FALLBACKS.contains(&reply));
        }
    }
}
