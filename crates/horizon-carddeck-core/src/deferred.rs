//! Deferred execution queue.
//!
//! Closures posted here run after the current synchronous turn and after any
//! pending render flush: the owning card/container drains the queue once it
//! has finished processing the current batch of events and re-rendering.
//! This is the framework's "next tick" primitive - content instances use it
//! to fire their post-refresh `updated` signal so consumers never observe it
//! inside the call stack that delivered the data.
//!
//! Every `post` is an independent entry. Entries are never coalesced: posting
//! the same notification twice runs it twice, in FIFO order. Closures posted
//! while a drain is in progress run on the next drain, not the current one.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;

/// A unique identifier for a deferred closure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeferredId(u64);

impl DeferredId {
    /// Get the raw u64 value of this ID.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

/// Global counter for generating unique deferred IDs.
static NEXT_DEFERRED_ID: AtomicU64 = AtomicU64::new(1);

fn next_deferred_id() -> DeferredId {
    DeferredId(NEXT_DEFERRED_ID.fetch_add(1, Ordering::Relaxed))
}

/// A boxed deferred closure.
type BoxedDeferred = Box<dyn FnOnce() + Send + 'static>;

struct DeferredEntry {
    id: DeferredId,
    run: BoxedDeferred,
}

/// A FIFO queue of closures to run after the current turn.
pub struct DeferredQueue {
    entries: VecDeque<DeferredEntry>,
}

impl DeferredQueue {
    /// Create a new, empty queue.
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    /// Post a closure to run on the next drain.
    ///
    /// Returns an ID that can be used to cancel the closure before it runs.
    pub fn post<F>(&mut self, run: F) -> DeferredId
    where
        F: FnOnce() + Send + 'static,
    {
        let id = next_deferred_id();
        self.entries.push_back(DeferredEntry {
            id,
            run: Box::new(run),
        });
        id
    }

    /// Cancel a pending closure.
    ///
    /// Returns `true` if the closure was found and removed.
    pub fn cancel(&mut self, id: DeferredId) -> bool {
        if let Some(pos) = self.entries.iter().position(|e| e.id == id) {
            self.entries.remove(pos);
            true
        } else {
            false
        }
    }

    /// Check if there are any pending closures.
    pub fn has_pending(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Get the number of pending closures.
    pub fn pending_count(&self) -> usize {
        self.entries.len()
    }

    /// Run every closure currently in the queue, in FIFO order.
    ///
    /// Returns the number of closures that ran.
    pub fn drain(&mut self) -> usize {
        let batch: Vec<DeferredEntry> = self.entries.drain(..).collect();
        let count = batch.len();
        if count > 0 {
            tracing::trace!(
                target: "horizon_carddeck_core::deferred",
                count,
                "draining deferred queue"
            );
        }
        for entry in batch {
            (entry.run)();
        }
        count
    }
}

impl Default for DeferredQueue {
    fn default() -> Self {
        Self::new()
    }
}

/// A thread-safe wrapper around [`DeferredQueue`].
///
/// Content instances hold this behind an `Arc` so provider callbacks can
/// post from wherever they fire; the owning container calls [`drain`] once
/// per render pass.
///
/// [`drain`]: SharedDeferredQueue::drain
pub struct SharedDeferredQueue {
    inner: Mutex<DeferredQueue>,
}

impl SharedDeferredQueue {
    /// Create a new, empty shared queue.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(DeferredQueue::new()),
        }
    }

    /// Post a closure to run on the next drain.
    pub fn post<F>(&self, run: F) -> DeferredId
    where
        F: FnOnce() + Send + 'static,
    {
        self.inner.lock().post(run)
    }

    /// Cancel a pending closure.
    pub fn cancel(&self, id: DeferredId) -> bool {
        self.inner.lock().cancel(id)
    }

    /// Check if there are any pending closures.
    pub fn has_pending(&self) -> bool {
        self.inner.lock().has_pending()
    }

    /// Get the number of pending closures.
    pub fn pending_count(&self) -> usize {
        self.inner.lock().pending_count()
    }

    /// Run every closure currently in the queue, in FIFO order.
    ///
    /// The queue is swapped out before running, so closures posted from
    /// inside a running closure land on the next drain and the lock is not
    /// held during execution.
    pub fn drain(&self) -> usize {
        let mut batch = DeferredQueue::new();
        std::mem::swap(&mut *self.inner.lock(), &mut batch);
        batch.drain()
    }
}

impl Default for SharedDeferredQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::AtomicUsize;

    use super::*;

    #[test]
    fn test_post_and_drain_fifo() {
        let mut queue = DeferredQueue::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        for i in 0..3 {
            let order = order.clone();
            queue.post(move || order.lock().push(i));
        }

        assert_eq!(queue.pending_count(), 3);
        assert_eq!(queue.drain(), 3);
        assert_eq!(*order.lock(), vec![0, 1, 2]);
        assert!(!queue.has_pending());
    }

    #[test]
    fn test_cancel() {
        let mut queue = DeferredQueue::new();
        let ran = Arc::new(AtomicUsize::new(0));

        let ran_a = ran.clone();
        let a = queue.post(move || {
            ran_a.fetch_add(1, Ordering::SeqCst);
        });
        let ran_b = ran.clone();
        let _b = queue.post(move || {
            ran_b.fetch_add(10, Ordering::SeqCst);
        });

        assert!(queue.cancel(a));
        assert!(!queue.cancel(a)); // Already removed
        assert_eq!(queue.drain(), 1);
        assert_eq!(ran.load(Ordering::SeqCst), 10);
    }

    #[test]
    fn test_each_post_runs_once() {
        // Two independent posts of the same notification both run.
        let mut queue = DeferredQueue::new();
        let count = Arc::new(AtomicUsize::new(0));

        for _ in 0..2 {
            let count = count.clone();
            queue.post(move || {
                count.fetch_add(1, Ordering::SeqCst);
            });
        }

        queue.drain();
        assert_eq!(count.load(Ordering::SeqCst), 2);
        // Nothing left; a second drain runs nothing.
        assert_eq!(queue.drain(), 0);
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_post_during_drain_runs_next_drain() {
        let queue = Arc::new(SharedDeferredQueue::new());
        let ran = Arc::new(AtomicUsize::new(0));

        let queue_clone = queue.clone();
        let ran_clone = ran.clone();
        queue.post(move || {
            ran_clone.fetch_add(1, Ordering::SeqCst);
            let ran_inner = ran_clone.clone();
            queue_clone.post(move || {
                ran_inner.fetch_add(1, Ordering::SeqCst);
            });
        });

        assert_eq!(queue.drain(), 1);
        assert_eq!(ran.load(Ordering::SeqCst), 1);
        assert_eq!(queue.pending_count(), 1);

        assert_eq!(queue.drain(), 1);
        assert_eq!(ran.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_shared_queue_cross_thread_post() {
        let queue = Arc::new(SharedDeferredQueue::new());
        let count = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let queue = queue.clone();
                let count = count.clone();
                std::thread::spawn(move || {
                    for _ in 0..10 {
                        let count = count.clone();
                        queue.post(move || {
                            count.fetch_add(1, Ordering::SeqCst);
                        });
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(queue.drain(), 40);
        assert_eq!(count.load(Ordering::SeqCst), 40);
    }
}
