//! Request lifecycle feature module.
//!
//! One slot per backend operation (ask, summarize). Each slot owns a
//! [`RequestState`] that moves `Idle → InFlight → Succeeded | Failed` and
//! back to `InFlight` on the next trigger.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `input.rs` - Slot inputs and their fixed display strings
//! - `state.rs` - Phase, input, result/error, dispatch generation
//! - `intent.rs` - Edit, Trigger, Complete, Reset
//! - `outcome.rs` - Collapses client errors into a single failure
//! - `reducer.rs` - State transitions (pure, no side effects)

mod input;
mod intent;
mod outcome;
mod reducer;
mod state;

pub use input::{FileSelection, Question, SlotInput};
pub use intent::RequestIntent;
pub use outcome::RequestOutcome;
pub use reducer::RequestReducer;
pub use state::{Phase, RequestState};

pub type AskState = RequestState<Question>;
pub type AskIntent = RequestIntent<Question>;
pub type AskReducer = RequestReducer<Question>;

pub type SummarizeState = RequestState<FileSelection>;
pub type SummarizeIntent = RequestIntent<FileSelection>;
pub type SummarizeReducer = RequestReducer<FileSelection>;
