//! Intents for a request slot.

use crate::ui::mvi::Intent;

use super::input::SlotInput;
use super::outcome::RequestOutcome;

#[derive(Debug, Clone)]
pub enum RequestIntent<I> {
    /// Replace the slot input (typed text, newly selected file).
    /// Ignored while in flight; otherwise returns the slot to `Idle`.
    EditInput(I),

    /// Start a call if nothing is in flight and the input is present.
    Trigger,

    /// A dispatched call finished.
    Complete {
        /// Generation the call was dispatched with.
        generation: u64,
        outcome: RequestOutcome,
    },

    /// Back to `Idle` with empty input. Does not cancel a dispatched call.
    Reset,
}

impl<I: SlotInput> Intent for RequestIntent<I> {}
