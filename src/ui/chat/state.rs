//! State for the chat pane.

use crate::ui::mvi::UiState;

pub const BOT_NAME: &str = "RUG";
pub const GREETING: &str = "Hey there! Tell me your funniest family plan and I will react.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Author {
    You,
    Bot,
}

impl Author {
    pub fn label(self) -> &'static str {
        match self {
            Author::You => "You",
            Author::Bot => BOT_NAME,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    /// Unique, increasing within one chat.
    pub id: u64,
    pub from: Author,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatState {
    pub(super) messages: Vec<ChatMessage>,
    pub(super) draft: String,
    /// Replies scheduled but not yet shown.
    pub(super) pending_replies: usize,
    pub(super) next_id: u64,
}

impl Default for ChatState {
    fn default() -> Self {
        Self {
            messages: vec![ChatMessage {
                id: 0,
                from: Author::Bot,
                text: GREETING.to_string(),
            }],
            draft: String::new(),
            pending_replies: 0,
            next_id: 1,
        }
    }
}

impl UiState for ChatState {}

impl ChatState {
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn pending_replies(&self) -> usize {
        self.pending_replies
    }

    /// Whether to show the typing indicator.
    pub fn is_typing(&self) -> bool {
        self.pending_replies > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_greeting() {
        let state = ChatState::default();
        assert_eq!(state.messages().len(), 1);
        assert_eq!(state.messages()[0].from, Author::Bot);
        assert_eq!(state.messages()[0].text, GREETING);
        assert!(!state.is_typing());
    }

    #[test]
    fn author_labels() {
        assert_eq!(Author::You.label(), "You");
        assert_eq!(Author::Bot.label(), "RUG");
    }
}
