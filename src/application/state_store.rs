// src/application/state_store.rs
//
// Observable state holder for view-state models.
//
// DESIGN PRINCIPLES:
// 1. Snapshots - state is replaced wholesale, never mutated in place
// 2. Synchronous - subscribers run on the publishing thread, in subscription order
// 3. Isolated - a panicking subscriber is logged and skipped

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::{debug, warn};

type Subscriber<S> = Box<dyn Fn(&S) + Send + Sync>;

pub struct StateStore<S> {
    state: Arc<RwLock<S>>,
    subscribers: Arc<RwLock<Vec<Subscriber<S>>>>,
}

// A poisoned lock still holds a complete snapshot, since writers only swap values.
fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|e| e.into_inner())
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|e| e.into_inner())
}

impl<S: Clone + Send + Sync + 'static> StateStore<S> {
    pub fn new(initial: S) -> Self {
        Self {
            state: Arc::new(RwLock::new(initial)),
            subscribers: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Current snapshot
    pub fn get(&self) -> S {
        read(&self.state).clone()
    }

    /// Registers a callback invoked after every publication
    pub fn subscribe<F>(&self, subscriber: F)
    where
        F: Fn(&S) + Send + Sync + 'static,
    {
        write(&self.subscribers).push(Box::new(subscriber));
    }

    pub fn subscriber_count(&self) -> usize {
        read(&self.subscribers).len()
    }

    /// Replaces the state with `next` and notifies subscribers
    pub fn set(&self, next: S) {
        *write(&self.state) = next.clone();
        self.publish(&next);
    }

    /// Derives the next snapshot from the current one
    ///
    /// The write lock is held while `f` runs, so concurrent updates never
    /// lose each other's changes.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&S) -> S,
    {
        let next = {
            let mut state = write(&self.state);
            let next = f(&state);
            *state = next.clone();
            next
        };
        self.publish(&next);
    }

    fn publish(&self, snapshot: &S) {
        let subscribers = read(&self.subscribers);
        debug!(
            "Publishing {} to {} subscribers",
            std::any::type_name::<S>(),
            subscribers.len()
        );

        for (idx, subscriber) in subscribers.iter().enumerate() {
            let result = catch_unwind(AssertUnwindSafe(|| subscriber(snapshot)));
            if result.is_err() {
                warn!(
                    "Subscriber {} for {} panicked",
                    idx,
                    std::any::type_name::<S>()
                );
            }
        }
    }
}

impl<S> Clone for StateStore<S> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            subscribers: Arc::clone(&self.subscribers),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[test]
    fn test_set_replaces_state() {
        let store = StateStore::new(1);
        store.set(2);
        assert_eq!(store.get(), 2);
    }

    #[test]
    fn test_update_derives_from_current() {
        let store = StateStore::new(vec![1]);
        store.update(|v| {
            let mut next = v.clone();
            next.push(2);
            next
        });
        assert_eq!(store.get(), vec![1, 2]);
    }

    #[test]
    fn test_subscribers_run_in_order() {
        let store = StateStore::new(0);
        let seen = Arc::new(Mutex::new(Vec::new()));

        for tag in ["a", "b"] {
            let seen = seen.clone();
            store.subscribe(move |value: &i32| {
                seen.lock().unwrap().push(format!("{}{}", tag, value))
            });
        }
        store.set(7);

        assert_eq!(*seen.lock().unwrap(), vec!["a7", "b7"]);
        assert_eq!(store.subscriber_count(), 2);
    }

    #[test]
    fn test_panicking_subscriber_does_not_stop_others() {
        let store = StateStore::new(0);
        let calls = Arc::new(AtomicUsize::new(0));

        store.subscribe(|_: &i32| panic!("boom"));
        let counter = calls.clone();
        store.subscribe(move |_: &i32| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        store.set(1);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(store.get(), 1);
    }

    #[test]
    fn test_clones_share_state() {
        let store = StateStore::new("loading".to_string());
        let other = store.clone();
        other.set("ready".to_string());
        assert_eq!(store.get(), "ready");
    }
}
