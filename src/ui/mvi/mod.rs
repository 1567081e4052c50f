//! Model-View-Intent primitives shared by the UI features.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ render
//!    ↑                               │
//!    └──── key events, completions ──┘
//! ```
//!
//! Reducers are pure. Side effects (HTTP calls, timers) live in
//! [`App`](crate::ui::app::App), which inspects the state before and after a
//! dispatch to decide what to start.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
