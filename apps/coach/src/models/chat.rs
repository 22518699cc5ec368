use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One message in the chat transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Ordered chat history. The first entry is always the configured system brief;
/// it is kept for context only and is never sent or displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    pub fn new(system_brief: impl Into<String>) -> Self {
        Self {
            messages: vec![ChatMessage {
                role: Role::System,
                content: system_brief.into(),
            }],
        }
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn system_brief(&self) -> &str {
        &self.messages[0].content
    }

    /// Messages a reader should see, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &ChatMessage> {
        self.messages.iter().filter(|m| m.role != Role::System)
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.visible().last()
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new(String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_brief_hidden() {
        let mut transcript = Transcript::new("You are a coach.");
        assert_eq!(transcript.visible().count(), 0);
        assert!(transcript.last().is_none());

        transcript.push(ChatMessage::user("hi"));
        transcript.push(ChatMessage::assistant("hello"));

        let visible: Vec<_> = transcript.visible().collect();
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].role, Role::User);
        assert_eq!(transcript.last().map(|m| m.content.as_str()), Some("hello"));
        assert_eq!(transcript.system_brief(), "You are a coach.");
    }
}
