//! State container with synchronous subscriber notification.
//!
//! The store owns the only copy of the current state. Every `dispatch` runs
//! the reducer, replaces the state wholesale and then calls each subscriber
//! with a read-only view of the new state, in registration order.

use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::{Mutex, ReentrantMutex, RwLock};

use crate::ui::mvi::Reducer;

type Callback<S> = Arc<dyn Fn(&S) + Send + Sync>;

/// Identifier handed out for every registered subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Subscriber<S> {
    id: SubscriptionId,
    callback: Callback<S>,
}

struct StoreInner<S> {
    /// Serializes dispatches. Re-entrant so a subscriber may dispatch.
    dispatch_lock: ReentrantMutex<()>,
    state: RwLock<S>,
    subscribers: Mutex<Vec<Subscriber<S>>>,
    next_id: AtomicU64,
    /// Bumped on every dispatch; a change mid-notify means a subscriber
    /// dispatched and everyone after it has already seen newer state.
    generation: AtomicU64,
}

impl<S> StoreInner<S> {
    fn remove(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.lock();
        let before = subscribers.len();
        subscribers.retain(|s| s.id != id);
        subscribers.len() != before
    }
}

/// Shared handle to a store driven by reducer `R`.
///
/// Cloning is cheap; all clones observe and update the same state.
pub struct Store<R: Reducer> {
    inner: Arc<StoreInner<R::State>>,
    _reducer: PhantomData<fn() -> R>,
}

impl<R: Reducer> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            _reducer: PhantomData,
        }
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new(R::State::default())
    }
}

impl<R: Reducer> Store<R> {
    /// Create a store holding `initial` as its current state.
    pub fn new(initial: R::State) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                dispatch_lock: ReentrantMutex::new(()),
                state: RwLock::new(initial),
                subscribers: Mutex::new(Vec::new()),
                next_id: AtomicU64::new(0),
                generation: AtomicU64::new(0),
            }),
            _reducer: PhantomData,
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> R::State {
        self.inner.state.read().clone()
    }

    /// Apply `action` through the reducer and notify every subscriber once.
    ///
    /// When a subscriber dispatches re-entrantly, the nested dispatch
    /// notifies everyone with the newer state and the outer notification
    /// stops there, so no subscriber sees an older state last.
    pub fn dispatch(&self, action: R::Action) {
        let _serial = self.inner.dispatch_lock.lock();

        tracing::debug!(action = ?action, "Dispatching action");

        let next = {
            let mut state = self.inner.state.write();
            let current = std::mem::take(&mut *state);
            *state = R::reduce(current, action);
            state.clone()
        };
        let generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;

        // Snapshot the list so callbacks can subscribe or unsubscribe freely.
        let callbacks: Vec<Callback<R::State>> = self
            .inner
            .subscribers
            .lock()
            .iter()
            .map(|s| Arc::clone(&s.callback))
            .collect();

        for callback in callbacks {
            callback(&next);
            if self.inner.generation.load(Ordering::SeqCst) != generation {
                tracing::trace!("Nested dispatch superseded notification");
                break;
            }
        }
    }

    /// Register `callback` to run after every dispatch.
    ///
    /// The returned guard unsubscribes when dropped.
    pub fn subscribe<F>(&self, callback: F) -> Subscription<R::State>
    where
        F: Fn(&R::State) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.inner.next_id.fetch_add(1, Ordering::Relaxed));
        self.inner.subscribers.lock().push(Subscriber {
            id,
            callback: Arc::new(callback),
        });
        tracing::trace!(subscription = id.0, "Subscriber registered");

        let weak: Weak<StoreInner<R::State>> = Arc::downgrade(&self.inner);
        Subscription {
            id,
            store: Some(weak),
        }
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.lock().len()
    }
}

/// Handle returned by [`Store::subscribe`].
///
/// Dropping it removes the subscriber, so keep it alive for as long as
/// notifications are wanted.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription<S> {
    id: SubscriptionId,
    store: Option<Weak<StoreInner<S>>>,
}

impl<S> Subscription<S> {
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Stop receiving notifications. Safe to call after the store is gone.
    pub fn unsubscribe(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(inner) = self.store.take().and_then(|weak| weak.upgrade()) {
            if inner.remove(self.id) {
                tracing::trace!(subscription = self.id.0, "Subscriber removed");
            }
        }
    }
}

impl<S> Drop for Subscription<S> {
    fn drop(&mut self) {
        self.release();
    }
}
