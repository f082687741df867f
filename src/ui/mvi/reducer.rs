//! Reducer trait for MVI architecture.

use super::state::UiState;

/// Reducer transforms state based on messages.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Message) -> State
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The message type this reducer handles.
    type Message: Send + 'static;

    /// Process a message and return the new state.
    ///
    /// This should be a pure function with no side effects.
    fn reduce(state: Self::State, message: Self::Message) -> Self::State;
}
