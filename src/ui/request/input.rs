//! Inputs for the two request slots.

use crate::upload::SelectedFile;

/// What a slot acts on, plus the fixed strings the slot shows.
pub trait SlotInput: Clone + PartialEq + Default + Send + 'static {
    /// Shown before the first trigger.
    const IDLE_TEXT: &'static str;
    /// Shown while a call is in flight.
    const PENDING_TEXT: &'static str;
    /// Result when the server answers without text.
    const EMPTY_RESULT: &'static str;
    /// Error message for every kind of failure.
    const FAILURE: &'static str;
    const ACTION_LABEL: &'static str;
    const BUSY_LABEL: &'static str;

    /// Presence check applied by `Trigger`.
    fn is_ready(&self) -> bool;
}

/// Question text for the ask slot, kept exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Question(String);

impl Question {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn text(&self) -> &str {
        &self.0
    }

    /// Copy with `ch` appended.
    pub fn pushed(&self, ch: char) -> Self {
        let mut text = self.0.clone();
        text.push(ch);
        Self(text)
    }

    /// Copy with the last character removed.
    pub fn popped(&self) -> Self {
        let mut text = self.0.clone();
        text.pop();
        Self(text)
    }
}

impl SlotInput for Question {
    const IDLE_TEXT: &'static str = "No answer yet.";
    const PENDING_TEXT: &'static str = "Thinking...";
    const EMPTY_RESULT: &'static str = "No answer returned.";
    const FAILURE: &'static str = "Could not reach AI. Ensure backend is running.";
    const ACTION_LABEL: &'static str = "Ask";
    const BUSY_LABEL: &'static str = "Asking…";

    fn is_ready(&self) -> bool {
        !self.0.trim().is_empty()
    }
}

/// File reference for the summarize slot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FileSelection(Option<SelectedFile>);

impl FileSelection {
    pub fn new(file: SelectedFile) -> Self {
        Self(Some(file))
    }

    pub fn file(&self) -> Option<&SelectedFile> {
        self.0.as_ref()
    }
}

impl SlotInput for FileSelection {
    const IDLE_TEXT: &'static str = "No file uploaded yet.";
    const PENDING_TEXT: &'static str = "Summarizing...";
    const EMPTY_RESULT: &'static str = "No summary returned.";
    const FAILURE: &'static str = "Could not summarize the file.";
    const ACTION_LABEL: &'static str = "Upload & Summarize";
    const BUSY_LABEL: &'static str = "Summarizing…";

    fn is_ready(&self) -> bool {
        self.0.is_some()
    }
}
