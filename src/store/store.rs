use std::panic::{catch_unwind, resume_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::merge::Merge;

type Subscriber<S> = Arc<dyn Fn(&S) + Send + Sync>;

/// A thread-safe container for a single piece of application state.
///
/// The store mediates all reads, partial writes, and change notifications.
/// Writes are shallow merges of a patch into the current state; after the
/// merge every registered subscriber is invoked exactly once, synchronously,
/// in registration order, with the post-merge state.
///
/// Cloning a `StateStore` yields another handle to the same state and the
/// same subscriber list, so a store can be handed to each consumer that
/// needs it instead of living in a global.
pub struct StateStore<S> {
    state: Arc<RwLock<S>>,
    subscribers: Arc<RwLock<Vec<(usize, Subscriber<S>)>>>,
    next_id: Arc<AtomicUsize>,
}

impl<S: Merge + 'static> StateStore<S> {
    /// Create a new store holding exactly the given initial state.
    ///
    /// No validation is performed and no subscribers exist yet.
    pub fn new(initial: S) -> Self {
        Self {
            state: Arc::new(RwLock::new(initial)),
            subscribers: Arc::new(RwLock::new(Vec::new())),
            next_id: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Get a clone of the current state.
    ///
    /// Reflects the most recent completed [`set_state`](Self::set_state);
    /// mutating the returned value never affects the store.
    pub fn get_state(&self) -> S {
        self.state.read().unwrap().clone()
    }

    /// Merge `patch` into the current state, then notify every subscriber.
    ///
    /// The merge runs under the state write lock, so concurrent writers are
    /// linearized and a concurrent [`get_state`](Self::get_state) never
    /// observes a half-merged value. The notification pass then delivers the
    /// post-merge state to every subscriber registered at the start of the
    /// pass, in registration order, before this call returns.
    ///
    /// An empty patch still merges and still notifies; there is no no-op
    /// short-circuit.
    ///
    /// Callbacks run outside all store locks, so a subscriber may re-enter
    /// the store: a nested `set_state` runs its own full notification pass
    /// to completion before the outer pass resumes, and a subscriber that
    /// cancels itself or a peer mid-pass does not disturb delivery to the
    /// rest of the current pass's snapshot.
    ///
    /// # Panics
    ///
    /// If a subscriber panics, the remaining subscribers in the pass are
    /// still notified and the first panic is then re-raised to the caller.
    pub fn set_state(&self, patch: S::Patch) {
        let snapshot = {
            let mut state = self.state.write().unwrap();
            state.merge(patch);
            state.clone()
        };
        tracing::trace!("state merged, notifying subscribers");
        self.notify(&snapshot);
    }

    /// Register `callback` to be invoked on every state change.
    ///
    /// The callback is appended to the end of the subscriber list and then
    /// immediately invoked once with the current state, before `subscribe`
    /// returns. The returned [`Subscription`] cancels exactly this
    /// registration; if the same callback value is subscribed twice, each
    /// registration gets its own independent handle.
    ///
    /// Dropping the handle without cancelling leaves the registration in
    /// place for the lifetime of the store.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&S) + Send + Sync + 'static,
    {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let callback: Subscriber<S> = Arc::new(callback);
        self.subscribers
            .write()
            .unwrap()
            .push((id, Arc::clone(&callback)));
        tracing::trace!(id, "subscriber registered");

        // Initial synchronous delivery, outside the lock
        let current = self.state.read().unwrap().clone();
        callback(&current);

        let subscribers = Arc::downgrade(&self.subscribers);
        Subscription {
            cancel: Box::new(move || {
                if let Some(subscribers) = subscribers.upgrade() {
                    subscribers.write().unwrap().retain(|(sid, _)| *sid != id);
                    tracing::trace!(id, "subscriber cancelled");
                }
            }),
        }
    }

    /// Deliver `state` to every currently registered subscriber.
    ///
    /// Iterates a snapshot of the list taken at pass start, so mid-pass
    /// registration changes take effect from the next pass onward. A
    /// subscriber panic is held until the rest of the pass has run, then
    /// re-raised.
    fn notify(&self, state: &S) {
        let snapshot: Vec<Subscriber<S>> = self
            .subscribers
            .read()
            .unwrap()
            .iter()
            .map(|(_, callback)| Arc::clone(callback))
            .collect();
        tracing::trace!(subscribers = snapshot.len(), "notification pass");

        let mut panicked = None;
        for callback in snapshot {
            if let Err(payload) = catch_unwind(AssertUnwindSafe(|| callback(state))) {
                if panicked.is_none() {
                    panicked = Some(payload);
                }
            }
        }
        if let Some(payload) = panicked {
            resume_unwind(payload);
        }
    }
}

impl<S> Clone for StateStore<S> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            subscribers: Arc::clone(&self.subscribers),
            next_id: Arc::clone(&self.next_id),
        }
    }
}

/// Cancellation handle for a single subscriber registration.
///
/// The only operation is [`cancel`](Self::cancel), which removes the
/// registration the handle was returned from and is idempotent. Dropping the
/// handle does NOT cancel; an abandoned registration simply stays subscribed.
/// The handle holds only a weak reference to the store's subscriber list, so
/// keeping it around never prolongs the store's life.
///
/// A notification pass that snapshotted the subscriber list before
/// cancellation still delivers to the cancelled callback; cancellation takes
/// effect from the next pass onward.
pub struct Subscription {
    cancel: Box<dyn Fn() + Send + Sync>,
}

impl Subscription {
    /// Remove this registration from the store.
    ///
    /// Safe to call more than once; calls after the first are no-ops.
    pub fn cancel(&self) {
        (self.cancel)()
    }
}
