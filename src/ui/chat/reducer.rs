//! Reducer for the chat pane.

use crate::ui::mvi::Reducer;

use super::intent::ChatIntent;
use super::state::{Author, ChatMessage, ChatState};

/// Reducer for chat state transitions.
///
/// An accepted `Send` increments `pending_replies`; the caller schedules the
/// matching reply.
pub struct ChatReducer;

impl Reducer for ChatReducer {
    type State = ChatState;
    type Intent = ChatIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ChatIntent::EditDraft(draft) => ChatState { draft, ..state },

            ChatIntent::Send => {
                let text = state.draft.trim();
                if text.is_empty() {
                    return state;
                }
                let text = text.to_string();
                let mut state = push(state, Author::You, text);
                state.draft.clear();
                state.pending_replies += 1;
                state
            }

            ChatIntent::ReplyArrived { text } => {
                let mut state = push(state, Author::Bot, text);
                state.pending_replies = state.pending_replies.saturating_sub(1);
                state
            }

            ChatIntent::CancelPending => ChatState {
                pending_replies: 0,
                ..state
            },
        }
    }
}

fn push(mut state: ChatState, from: Author, text: String) -> ChatState {
    state.messages.push(ChatMessage {
        id: state.next_id,
        from,
        text,
    });
    state.next_id += 1;
    state
}
