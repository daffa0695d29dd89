use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, trace};

/// Identifier returned by [`Slot::subscribe`], used to unsubscribe later.
/// 订阅 ID，用于取消订阅
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Callback receiving the slot value, `None` meaning "not yet determined".
pub type Observer<T> = Arc<dyn Fn(Option<&T>) + Send + Sync>;

struct Registration<T> {
    id: SubscriptionId,
    // Sequence number of the first write this observer has not seen yet.
    since: u64,
    observer: Observer<T>,
}

struct SlotState<T> {
    value: Option<T>,
    observers: Vec<Registration<T>>,
    // Writes not yet delivered, stamped with their sequence number.
    pending: VecDeque<(u64, Option<T>)>,
    next_seq: u64,
    next_id: u64,
    draining: bool,
}

/// A single observable value in the wizard store.
///
/// A slot starts absent. Every [`set`](Slot::set) replaces the value and
/// notifies all observers in registration order. The outermost `set`
/// returns only once every notification, including those of writes made
/// from inside observers, has been delivered.
///
/// A `set` issued from inside an observer stores the value at once (a
/// following [`get`](Slot::get) returns it) and queues its notification
/// behind the one being delivered, so every observer sees the writes in
/// the order they happened.
pub struct Slot<T> {
    name: &'static str,
    state: Mutex<SlotState<T>>,
}

/// Leaves the slot usable when an observer panics mid-delivery.
struct DrainReset<'a, T>(&'a Slot<T>);

impl<T> Drop for DrainReset<'_, T> {
    fn drop(&mut self) {
        if std::thread::panicking() {
            let mut state = self.0.lock();
            state.draining = false;
            state.pending.clear();
        }
    }
}

impl<T> Slot<T> {
    fn lock(&self) -> MutexGuard<'_, SlotState<T>> {
        // Observers run outside the lock and a panicking drain resets its
        // own state, so a poisoned lock still holds a consistent value.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Clone> Slot<T> {
    /// Create an empty slot. `name` only shows up in logs.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            state: Mutex::new(SlotState {
                value: None,
                observers: Vec::new(),
                pending: VecDeque::new(),
                next_seq: 0,
                next_id: 0,
                draining: false,
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Current value, or `None` while the slot is still absent.
    pub fn get(&self) -> Option<T> {
        self.lock().value.clone()
    }

    pub fn is_set(&self) -> bool {
        self.lock().value.is_some()
    }

    /// Register an observer.
    ///
    /// The observer is called once right away with the current value and
    /// then once per subsequent change. Writes still queued when it
    /// registers are already part of that first value and are not
    /// delivered again.
    pub fn subscribe<F>(&self, observer: F) -> SubscriptionId
    where
        F: Fn(Option<&T>) + Send + Sync + 'static,
    {
        let observer: Observer<T> = Arc::new(observer);

        let (id, current) = {
            let mut state = self.lock();
            let id = SubscriptionId(state.next_id);
            state.next_id += 1;
            let since = state.next_seq;
            state.observers.push(Registration {
                id,
                since,
                observer: observer.clone(),
            });
            (id, state.value.clone())
        };
        trace!(slot = self.name, subscription = id.0, "observer registered");

        observer(current.as_ref());
        id
    }

    /// Stop notifications for `id`, effective immediately even in the
    /// middle of a delivery. The stored value is left untouched.
    ///
    /// Returns `true` if a subscription was removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut state = self.lock();
        let before = state.observers.len();
        state.observers.retain(|registration| registration.id != id);
        let removed = state.observers.len() < before;
        if removed {
            trace!(slot = self.name, subscription = id.0, "observer removed");
        }
        removed
    }

    pub fn observer_count(&self) -> usize {
        self.lock().observers.len()
    }

    fn is_subscribed(&self, id: SubscriptionId) -> bool {
        self.lock().observers.iter().any(|r| r.id == id)
    }

    /// Replace the value (`None` puts the slot back to absent) and notify.
    pub fn set(&self, value: Option<T>) {
        {
            let mut state = self.lock();
            debug!(slot = self.name, present = value.is_some(), "slot updated");
            let seq = state.next_seq;
            state.next_seq += 1;
            state.value = value.clone();
            state.pending.push_back((seq, value));
            if state.draining {
                return;
            }
            state.draining = true;
        }

        let _reset = DrainReset(self);
        loop {
            let (value, observers) = {
                let mut state = self.lock();
                let Some((seq, value)) = state.pending.pop_front() else {
                    state.draining = false;
                    break;
                };
                let observers: Vec<(SubscriptionId, Observer<T>)> = state
                    .observers
                    .iter()
                    .filter(|r| r.since <= seq)
                    .map(|r| (r.id, r.observer.clone()))
                    .collect();
                (value, observers)
            };

            for (id, observer) in observers {
                if self.is_subscribed(id) {
                    observer(value.as_ref());
                }
            }
        }
    }

    /// Read-modify-write helper built on [`set`](Slot::set).
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(Option<T>) -> Option<T>,
    {
        let current = self.get();
        self.set(f(current));
    }
}

impl<T> fmt::Debug for Slot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slot").field("name", &self.name).finish_non_exhaustive()
    }
}
