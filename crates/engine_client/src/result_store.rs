//! Observable holder of the most recent transform outcome.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use shared::protocol::TransformResult;

type Observer = Box<dyn FnMut(&TransformResult) + Send>;

/// Returned by [`ResultStore::subscribe`]; pass it back to
/// [`ResultStore::unsubscribe`] to stop receiving notifications.
#[derive(Debug, PartialEq, Eq)]
pub struct SubscriptionHandle(u64);

/// A single mutable cell holding the latest [`TransformResult`].
///
/// Writes are total replacements, never merges, and there is exactly one
/// current value at any instant; no history is kept. A `write` notifies every
/// active observer synchronously, in subscription order, each exactly once,
/// before the call returns.
///
/// The store is constructed explicitly and shared by reference rather than
/// living in a global, so each test builds its own instance. The initial
/// value is an empty success — indistinguishable from a run that processed
/// zero rows — and consumers treat it as the idle state.
///
/// Observers must not call `write`, `subscribe` or `unsubscribe` from inside
/// a notification; `read` is fine.
pub struct ResultStore {
    current: Mutex<TransformResult>,
    observers: Mutex<Vec<(u64, Observer)>>,
    next_id: AtomicU64,
}

impl ResultStore {
    pub fn new() -> Self {
        Self {
            current: Mutex::new(TransformResult::default()),
            observers: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(0),
        }
    }

    /// Current value. Idempotent between writes.
    pub fn read(&self) -> TransformResult {
        self.current.lock().expect("result cell poisoned").clone()
    }

    /// Replace the current value and notify all observers before returning.
    pub fn write(&self, value: TransformResult) {
        *self.current.lock().expect("result cell poisoned") = value.clone();

        let mut observers = self.observers.lock().expect("observer list poisoned");
        for (_, observer) in observers.iter_mut() {
            observer(&value);
        }
    }

    /// Register an observer. It is invoked immediately with the current value
    /// and again on every subsequent write.
    pub fn subscribe(
        &self,
        mut observer: impl FnMut(&TransformResult) + Send + 'static,
    ) -> SubscriptionHandle {
        observer(&self.read());

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.observers
            .lock()
            .expect("observer list poisoned")
            .push((id, Box::new(observer)));
        SubscriptionHandle(id)
    }

    pub fn unsubscribe(&self, handle: SubscriptionHandle) {
        self.observers
            .lock()
            .expect("observer list poisoned")
            .retain(|(id, _)| *id != handle.0);
    }
}

impl Default for ResultStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/result_store_tests.rs"]
mod tests;
