//! Bound for actions dispatched into a store.

/// An event handed to [`Store::dispatch`](crate::ui::store::Store::dispatch).
///
/// `Debug` is required because every dispatch logs its action. Capture tasks
/// build actions on executor threads and move them into the store, hence
/// `Send + 'static`.
pub trait Action: std::fmt::Debug + Send + 'static {}
