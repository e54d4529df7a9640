//! Observable single-slot selection cell.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::trace;

use crate::catalog::Product;

/// Handle returned by [`SelectionStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Arc<dyn Fn(Option<&Product>) + Send + Sync>;

#[derive(Default)]
struct Inner {
    value: Option<Product>,
    subscribers: Vec<(SubscriptionId, Callback)>,
    next_id: u64,
}

/// Holds at most one selected product.
///
/// Clones share the same slot, so a store created by the screen can be handed
/// to every view callback. Writes go through [`set`](Self::set) (or the
/// `select`/`clear` shorthands) and notify every subscriber synchronously,
/// in registration order, before returning. The lock is released before
/// notification so subscribers may read the store.
#[derive(Clone, Default)]
pub struct SelectionStore {
    inner: Arc<Mutex<Inner>>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_selection(value: Option<Product>) -> Self {
        let store = Self::new();
        store.inner.lock().value = value;
        store
    }

    pub fn get(&self) -> Option<Product> {
        self.inner.lock().value.clone()
    }

    pub fn is_selected(&self) -> bool {
        self.inner.lock().value.is_some()
    }

    pub fn set(&self, value: Option<Product>) {
        let subscribers: Vec<Callback> = {
            let mut inner = self.inner.lock();
            inner.value = value.clone();
            inner
                .subscribers
                .iter()
                .map(|(_, callback)| Arc::clone(callback))
                .collect()
        };
        trace!(
            selected = value.as_ref().map(|p| p.name.as_str()),
            subscribers = subscribers.len(),
            "selection updated"
        );
        for callback in subscribers {
            callback(value.as_ref());
        }
    }

    pub fn select(&self, product: Product) {
        self.set(Some(product));
    }

    pub fn clear(&self) {
        self.set(None);
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(Option<&Product>) + Send + Sync + 'static,
    {
        let mut inner = self.inner.lock();
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        inner.subscribers.push((id, Arc::new(callback)));
        id
    }

    /// Returns false if the id was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.inner.lock();
        let before = inner.subscribers.len();
        inner.subscribers.retain(|(sub, _)| *sub != id);
        inner.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.lock().subscribers.len()
    }
}

impl fmt::Debug for SelectionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("SelectionStore")
            .field("value", &inner.value)
            .field("subscribers", &inner.subscribers.len())
            .finish()
    }
}
