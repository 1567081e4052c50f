//! Reducer for request slots.

use std::marker::PhantomData;

use crate::ui::mvi::Reducer;

use super::input::SlotInput;
use super::intent::RequestIntent;
use super::outcome::RequestOutcome;
use super::state::{Phase, RequestState};

/// Reducer for request slot state transitions.
///
/// Pure function. The caller detects an accepted `Trigger` by the bumped
/// generation and issues the call itself.
pub struct RequestReducer<I>(PhantomData<I>);

impl<I: SlotInput> Reducer for RequestReducer<I> {
    type State = RequestState<I>;
    type Intent = RequestIntent<I>;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            RequestIntent::EditInput(input) => {
                if state.is_in_flight() {
                    return state;
                }
                RequestState {
                    phase: Phase::Idle,
                    input,
                    result: None,
                    error_message: None,
                    generation: state.generation,
                }
            }

            RequestIntent::Trigger => {
                if !state.can_trigger() {
                    return state;
                }
                RequestState {
                    phase: Phase::InFlight,
                    result: None,
                    error_message: None,
                    generation: state.generation.wrapping_add(1),
                    ..state
                }
            }

            RequestIntent::Complete {
                generation,
                outcome,
            } => {
                // Stale: reset happened, or a newer call owns the slot.
                if !state.is_in_flight() || generation != state.generation {
                    return state;
                }
                match outcome {
                    RequestOutcome::Answered(answer) => {
                        let text = answer
                            .filter(|text| !text.is_empty())
                            .unwrap_or_else(|| I::EMPTY_RESULT.to_string());
                        RequestState {
                            phase: Phase::Succeeded,
                            result: Some(text),
                            error_message: None,
                            ..state
                        }
                    }
                    RequestOutcome::RequestFailed => RequestState {
                        phase: Phase::Failed,
                        result: None,
                        error_message: Some(I::FAILURE.to_string()),
                        ..state
                    },
                }
            }

            RequestIntent::Reset => RequestState {
                phase: Phase::Idle,
                input: I::default(),
                result: None,
                error_message: None,
                generation: state.generation,
            },
        }
    }
}
