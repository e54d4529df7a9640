use super::intent::Intent;
use super::state::UiState;

/// The only place state transitions happen.
///
/// Implementations must be pure: same state and intent, same result.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
