use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const GREETING: &str = "Hello! I'm your AI career coach. I can help you with LinkedIn optimization, career advice, job search strategies, and professional development. What would you like to discuss today?";

/// Offered while the conversation holds nothing but the greeting.
pub const SUGGESTED_QUESTIONS: [&str; 4] = [
    "How can I improve my LinkedIn headline?",
    "What skills should I learn for career growth?",
    "How do I prepare for technical interviews?",
    "What's the best job search strategy?",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Assistant,
}

/// One chat message. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub sender: Sender,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(sender: Sender, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender,
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}

/// Append-only conversation log for one session.
#[derive(Debug, Clone)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
}

impl Default for ChatLog {
    fn default() -> Self {
        Self {
            messages: vec![ChatMessage::new(Sender::Assistant, GREETING)],
        }
    }
}

impl ChatLog {
    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// True until the user has sent anything.
    pub fn offers_suggestions(&self) -> bool {
        self.messages.len() == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_opens_with_greeting() {
        let log = ChatLog::default();
        assert_eq!(log.messages().len(), 1);
        assert_eq!(log.messages()[0].sender, Sender::Assistant);
        assert_eq!(log.messages()[0].content, GREETING);
        assert!(log.offers_suggestions());
    }

    #[test]
    fn test_push_appends_in_order() {
        let mut log = ChatLog::default();
        let question = ChatMessage::new(Sender::User, "hi");
        let answer = ChatMessage::new(Sender::Assistant, "hello");
        log.push(question.clone());
        log.push(answer.clone());

        assert_eq!(log.messages()[1], question);
        assert_eq!(log.messages()[2], answer);
        assert!(!log.offers_suggestions());
    }

    #[test]
    fn test_message_ids_are_unique() {
        let a = ChatMessage::new(Sender::User, "same");
        let b = ChatMessage::new(Sender::User, "same");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_sender_serializes_snake_case() {
        let json = serde_json::to_string(&Sender::Assistant).unwrap();
        assert_eq!(json, "\"assistant\"");
    }
}
