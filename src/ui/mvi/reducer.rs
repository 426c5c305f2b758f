use super::intent::Intent;
use super::state::UiState;

/// Reducer transforms state based on intents.
///
/// It is the only place where state transitions happen and must be a pure
/// function: `(State, Intent) -> State`.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
