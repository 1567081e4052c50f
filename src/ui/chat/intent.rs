//! Intents for the chat pane.

use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ChatIntent {
    /// Replace the draft text.
    EditDraft(String),

    /// Post the draft. Blank drafts are ignored.
    Send,

    /// A scheduled reply fired.
    ReplyArrived { text: String },

    /// Pending replies were cancelled (teardown).
    CancelPending,
}

impl Intent for ChatIntent {}
