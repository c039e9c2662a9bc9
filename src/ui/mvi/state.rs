//! Bound for anything a [`Store`](crate::ui::store::Store) can hold.

/// State kept by a store and handed to subscribers.
///
/// A store built with `Store::default()` begins at `Default::default()`, so
/// that value is the "nothing happened yet" screen. Subscribers get a cloned
/// snapshot by reference, possibly from a capture task on another worker
/// thread, which is why the bound asks for `Sync` as well as `Send`.
/// `PartialEq` lets callers compare snapshots without poking at fields.
pub trait StoreState: Clone + PartialEq + Default + Send + Sync + 'static {}
