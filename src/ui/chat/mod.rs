//! Canned-reply chat feature module.
//!
//! The bot ("RUG") never talks to the backend: every message it receives is
//! answered, after a fixed delay, with one of six stock replies.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Message log, draft, pending reply count
//! - `intent.rs` - Draft edits, send, reply arrival
//! - `reducer.rs` - State transitions
//! - `picker.rs` - Injectable reply selection
//! - `scheduler.rs` - Cancellable delayed callbacks

mod intent;
mod picker;
mod reducer;
mod scheduler;
mod state;

pub use intent::ChatIntent;
pub use picker::{pick_reply, FixedPicker, RandomPicker, ReplyPicker, REPLIES};
pub use reducer::ChatReducer;
pub use scheduler::ReplyScheduler;
pub use state::{Author, ChatMessage, ChatState, BOT_NAME, GREETING};
