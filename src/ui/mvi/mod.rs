//! Unidirectional data flow primitives.
//!
//! ```text
//! Action ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────── Capability ──────────┘
//! ```
//!
//! - **State**: immutable snapshot owned by the store
//! - **Action**: closed set of events describing a state change
//! - **Reducer**: pure function that turns (State, Action) into the next State

mod action;
mod reducer;
mod state;

pub use action::Action;
pub use reducer::Reducer;
pub use state::StoreState;
