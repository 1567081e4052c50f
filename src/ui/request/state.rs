//! State for one request slot.

use crate::ui::mvi::UiState;

use super::input::SlotInput;

/// Lifecycle stage of a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed,
}

/// State of a single request slot.
///
/// Fields are private so that only the reducer can establish the
/// invariants: `result` is set only in `Succeeded`, `error_message` only in
/// `Failed`.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestState<I> {
    pub(super) phase: Phase,
    pub(super) input: I,
    pub(super) result: Option<String>,
    pub(super) error_message: Option<String>,
    /// Bumped on every accepted trigger; completions carry the value they
    /// were dispatched with.
    pub(super) generation: u64,
}

impl<I: SlotInput> Default for RequestState<I> {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            input: I::default(),
            result: None,
            error_message: None,
            generation: 0,
        }
    }
}

impl<I: SlotInput> UiState for RequestState<I> {}

impl<I: SlotInput> RequestState<I> {
    /// Idle slot holding `input`.
    pub fn with_input(input: I) -> Self {
        Self {
            input,
            ..Self::default()
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_in_flight(&self) -> bool {
        self.phase == Phase::InFlight
    }

    /// True when a `Trigger` would be accepted.
    pub fn can_trigger(&self) -> bool {
        !self.is_in_flight() && self.input.is_ready()
    }

    /// Text for the preview area.
    pub fn display_text(&self) -> &str {
        match self.phase {
            Phase::Idle => I::IDLE_TEXT,
            Phase::InFlight => I::PENDING_TEXT,
            Phase::Succeeded => self.result.as_deref().unwrap_or(I::EMPTY_RESULT),
            Phase::Failed => self.error_message.as_deref().unwrap_or(I::FAILURE),
        }
    }

    /// Label for the trigger button.
    pub fn action_label(&self) -> &'static str {
        if self.is_in_flight() {
            I::BUSY_LABEL
        } else {
            I::ACTION_LABEL
        }
    }
}
