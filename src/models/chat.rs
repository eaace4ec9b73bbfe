use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Name the assistant speaks under in the transcript.
pub const ASSISTANT_NAME: &str = "Agri-Sense";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
        }
    }

    /// One transcript line, prefixed by the speaker.
    pub fn display(&self) -> String {
        match self.role {
            Role::User => format!("You: {}", self.text),
            Role::Assistant => format!("{ASSISTANT_NAME}: {}", self.text),
        }
    }
}

/// Append-only conversation history. Unbounded, kept in memory only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
}

impl ChatLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// Drops the history and starts over from `message`.
    pub fn restart_with(&mut self, message: ChatMessage) {
        self.messages.clear();
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn transcript(&self) -> Vec<String> {
        self.messages.iter().map(ChatMessage::display).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_preserves_order_and_count() {
        let sent: Vec<ChatMessage> = (0..25)
            .map(|i| {
                if i % 2 == 0 {
                    ChatMessage::user(format!("question {i}"))
                } else {
                    ChatMessage::assistant(format!("answer {i}"))
                }
            })
            .collect();

        let mut log = ChatLog::new();
        for m in &sent {
            log.append(m.clone());
        }
        assert_eq!(log.len(), sent.len());
        assert_eq!(log.messages(), sent.as_slice());
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut log = ChatLog::new();
        log.append(ChatMessage::user("hi"));
        log.append(ChatMessage::user("hi"));
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_transcript_formats_by_role() {
        let mut log = ChatLog::new();
        log.append(ChatMessage::user("hello"));
        log.append(ChatMessage::assistant("hi there"));
        assert_eq!(log.transcript(), vec!["You: hello", "Agri-Sense: hi there"]);
    }

    #[test]
    fn test_restart_with_replaces_history() {
        let mut log = ChatLog::new();
        log.append(ChatMessage::user("old"));
        log.append(ChatMessage::assistant("reply"));
        log.restart_with(ChatMessage::user("fresh"));
        assert_eq!(log.messages(), &[ChatMessage::user("fresh")]);
    }

    #[test]
    fn test_log_serialises_as_array() {
        let mut log = ChatLog::new();
        log.append(ChatMessage::assistant("ok"));
        assert_eq!(
            serde_json::to_value(&log).unwrap(),
            serde_json::json!([{ "role": "assistant", "text": "ok" }])
        );
    }
}
