//! Execution context for fire-and-forget capability work.
//!
//! Nothing in the crate spawns onto an ambient global runtime. Components
//! that start background work receive an [`Executor`] explicitly, so tests
//! can swap in [`QueueExecutor`] and decide exactly when tasks advance.

use std::collections::VecDeque;
use std::sync::Arc;
use std::task::{Context, Poll, Waker};

use futures_core::future::BoxFuture;
use parking_lot::Mutex;
use tokio::runtime::Handle;

/// Spawns detached tasks. Results are delivered through the store, never
/// through the spawn call.
pub trait Executor: Send + Sync {
    fn spawn(&self, task: BoxFuture<'static, ()>);
}

/// Executor backed by a tokio runtime.
#[derive(Clone)]
pub struct TokioExecutor {
    handle: Handle,
}

impl TokioExecutor {
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Executor for the runtime the caller is running on.
    ///
    /// # Panics
    /// Panics when called outside a tokio runtime.
    pub fn current() -> Self {
        Self::new(Handle::current())
    }
}

impl Executor for TokioExecutor {
    fn spawn(&self, task: BoxFuture<'static, ()>) {
        self.handle.spawn(task);
    }
}

/// Deterministic single-threaded executor.
///
/// Tasks only run inside [`QueueExecutor::run_until_stalled`], on the
/// calling thread, in spawn order.
#[derive(Clone, Default)]
pub struct QueueExecutor {
    queue: Arc<Mutex<VecDeque<BoxFuture<'static, ()>>>>,
}

impl QueueExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tasks spawned but not yet completed.
    pub fn pending(&self) -> usize {
        self.queue.lock().len()
    }

    /// Poll queued tasks until none of them can make progress.
    ///
    /// Tasks spawned while running are picked up in the same call. Returns
    /// how many tasks completed.
    pub fn run_until_stalled(&self) -> usize {
        let mut cx = Context::from_waker(Waker::noop());
        let mut completed = 0;

        loop {
            let batch: Vec<_> = self.queue.lock().drain(..).collect();
            if batch.is_empty() {
                break;
            }

            let mut progressed = false;
            let mut still_pending = Vec::new();
            for mut task in batch {
                match task.as_mut().poll(&mut cx) {
                    Poll::Ready(()) => {
                        completed += 1;
                        progressed = true;
                    }
                    Poll::Pending => still_pending.push(task),
                }
            }

            let mut queue = self.queue.lock();
            let spawned = !queue.is_empty();
            for task in still_pending.into_iter().rev() {
                queue.push_front(task);
            }
            if !progressed && !spawned {
                break;
            }
        }

        completed
    }
}

impl Executor for QueueExecutor {
    fn spawn(&self, task: BoxFuture<'static, ()>) {
        self.queue.lock().push_back(task);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn queued_tasks_wait_for_run() {
        let executor = QueueExecutor::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        executor.spawn(Box::pin(async move {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        assert_eq!(hits.load(Ordering::SeqCst), 0);
        assert_eq!(executor.pending(), 1);
        assert_eq!(executor.run_until_stalled(), 1);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(executor.pending(), 0);
    }

    #[test]
    fn nested_spawns_run_in_same_call() {
        let executor = QueueExecutor::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let inner_exec = executor.clone();
        let counter = Arc::clone(&hits);
        executor.spawn(Box::pin(async move {
            let counter = Arc::clone(&counter);
            inner_exec.spawn(Box::pin(async move {
                counter.fetch_add(1, Ordering::SeqCst);
            }));
        }));

        assert_eq!(executor.run_until_stalled(), 2);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn blocked_task_stays_queued() {
        let executor = QueueExecutor::new();
        let (tx, rx) = tokio::sync::oneshot::channel::<()>();
        executor.spawn(Box::pin(async move {
            let _ = rx.await;
        }));

        assert_eq!(executor.run_until_stalled(), 0);
        assert_eq!(executor.pending(), 1);

        tx.send(()).unwrap();
        assert_eq!(executor.run_until_stalled(), 1);
        assert_eq!(executor.pending(), 0);
    }
}
