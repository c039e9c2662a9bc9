//! Reducer trait for the store.

use super::action::Action;
use super::state::StoreState;

/// Computes the next store state from the current one and an action.
///
/// `Store::dispatch` takes the current state out of the store, passes it here
/// by value and stores whatever comes back, so the returned value replaces
/// the old state wholesale. No I/O, no panics: every action maps to a state.
pub trait Reducer {
    type State: StoreState;

    type Action: Action;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State;
}
