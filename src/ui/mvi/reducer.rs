use super::intent::Intent;
use super::state::UiState;

/// The single place where a feature's state changes.
///
/// `reduce` takes the old state by value and returns the next one. It must
/// not perform I/O.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
