// Observable state slot for presenters
//
// StateStore owns a PresenterState behind a mutex and fans every published
// snapshot out to registered listeners. Listeners are called after the state
// lock is released, so a listener may read the store again without deadlock.
//
// Subscriptions hold only a weak reference to the listener registry: dropping
// the store first is fine, and dropping the Subscription first unregisters.

use super::PresenterState;
use crate::error::PresenterError;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, Weak};

/// Callback invoked with each published snapshot
pub type Listener = Box<dyn Fn(&PresenterState) + Send + Sync + 'static>;

type SharedListener = Arc<dyn Fn(&PresenterState) + Send + Sync + 'static>;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[derive(Default)]
struct ListenerRegistry {
    next_id: AtomicU64,
    listeners: Mutex<Vec<(u64, SharedListener)>>,
}

impl ListenerRegistry {
    fn add(&self, listener: Listener) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        lock(&self.listeners).push((id, Arc::from(listener)));
        id
    }

    fn remove(&self, id: u64) {
        lock(&self.listeners).retain(|(existing, _)| *existing != id);
    }

    fn len(&self) -> usize {
        lock(&self.listeners).len()
    }

    fn notify(&self, state: &PresenterState) {
        // Clone the list so listeners can drop their own Subscription
        let listeners: Vec<SharedListener> = lock(&self.listeners)
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            listener(state);
        }
    }
}

/// Handle for a registered listener; unregisters on drop
#[must_use = "dropping a Subscription unregisters its listener immediately"]
pub struct Subscription {
    id: u64,
    registry: Weak<ListenerRegistry>,
}

impl Subscription {
    /// Unregister now (same as dropping)
    pub fn cancel(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.remove(self.id);
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("live", &(self.registry.strong_count() > 0))
            .finish()
    }
}

/// Observable presenter state with publish/subscribe
pub struct StateStore {
    state: Mutex<PresenterState>,
    registry: Arc<ListenerRegistry>,
}

impl StateStore {
    pub fn new(initial: PresenterState) -> Self {
        Self {
            state: Mutex::new(initial),
            registry: Arc::new(ListenerRegistry::default()),
        }
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> PresenterState {
        lock(&self.state).clone()
    }

    pub fn subscribe(&self, listener: Listener) -> Subscription {
        let id = self.registry.add(listener);
        tracing::trace!(subscription = id, "listener registered");
        Subscription {
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// Number of live listeners
    pub fn listener_count(&self) -> usize {
        self.registry.len()
    }

    /// Mutate the state, bump its revision and publish the result
    pub fn update(&self, mutate: impl FnOnce(&mut PresenterState)) {
        let published = {
            let mut state = lock(&self.state);
            mutate(&mut state);
            state.revision += 1;
            state.clone()
        };
        self.registry.notify(&published);
    }

    /// Replace the error slot
    ///
    /// The slot holds one value. Raising a new error while a displayable one
    /// is still pending drops the older one, which is logged rather than
    /// queued. Opaque errors are never acknowledged, so replacing them is
    /// silent.
    pub fn set_error(&self, error: Option<PresenterError>) {
        self.update(|state| {
            let pending = state.error.as_ref().filter(|e| e.as_localized().is_some());
            if let (Some(pending), Some(incoming)) = (pending, &error) {
                tracing::warn!(
                    "Error slot overwritten before acknowledgment: '{}' replaced by '{}'",
                    pending,
                    incoming
                );
            }
            state.error = error;
        });
    }
}

impl Default for StateStore {
    fn default() -> Self {
        Self::new(PresenterState::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::{LogBuffer, LogLevel, TuiLogLayer};
    use crate::presenter::testing::localized;
    use crate::presenter::ConvertItemModel;
    use std::sync::atomic::AtomicUsize;
    use tracing_subscriber::layer::SubscriberExt;

    #[test]
    fn test_update_publishes_to_listeners() {
        let store = StateStore::default();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let _sub = store.subscribe(Box::new(move |state: &PresenterState| {
            sink.lock().unwrap().push(state.convert_item_model.converted_result.clone());
        }));

        store.update(|s| s.convert_item_model.converted_result = "42".to_string());
        store.update(|s| s.convert_item_model.converted_result = "43".to_string());

        assert_eq!(*seen.lock().unwrap(), vec!["42", "43"]);
    }

    #[test]
    fn test_revision_increases_on_every_publish() {
        let store = StateStore::default();
        assert_eq!(store.snapshot().revision, 0);
        store.update(|s| s.is_loading = true);
        store.update(|s| s.is_loading = false);
        assert_eq!(store.snapshot().revision, 2);
    }

    #[test]
    fn test_dropping_subscription_unregisters() {
        let store = StateStore::default();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let sub = store.subscribe(Box::new(move |_: &PresenterState| {
            counter.fetch_add(1, Ordering::SeqCst);
        }));
        assert_eq!(store.listener_count(), 1);

        store.update(|s| s.is_loading = true);
        drop(sub);
        store.update(|s| s.is_loading = false);

        assert_eq!(store.listener_count(), 0);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_subscription_outliving_store_is_harmless() {
        let store = StateStore::default();
        let sub = store.subscribe(Box::new(|_: &PresenterState| {}));
        drop(store);
        sub.cancel();
    }

    #[test]
    fn test_listener_may_read_store_during_notify() {
        let store = Arc::new(StateStore::new(PresenterState {
            convert_item_model: ConvertItemModel::new("Currency", "Amount", vec![], ""),
            ..Default::default()
        }));
        let reader = Arc::clone(&store);
        let titles = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&titles);
        let _sub = store.subscribe(Box::new(move |_: &PresenterState| {
            sink.lock().unwrap().push(reader.snapshot().convert_item_model.title);
        }));

        store.update(|s| s.screen_title = "Rates".to_string());
        assert_eq!(*titles.lock().unwrap(), vec!["Currency"]);
    }

    #[test]
    fn test_set_error_replaces_slot() {
        let store = StateStore::default();
        store.set_error(Some(anyhow::anyhow!("first").into()));
        store.set_error(Some(anyhow::anyhow!("second").into()));
        let error = store.snapshot().error.expect("error set");
        assert_eq!(error.to_string(), "second");

        store.set_error(None);
        assert!(store.snapshot().error.is_none());
    }

    /// Run `f` with a capturing subscriber and return what it logged
    fn captured_logs(f: impl FnOnce()) -> LogBuffer {
        let buffer = LogBuffer::new();
        let subscriber = tracing_subscriber::registry().with(TuiLogLayer::new(buffer.clone()));
        tracing::subscriber::with_default(subscriber, f);
        buffer
    }

    #[test]
    fn test_overwriting_pending_error_warns() {
        let store = StateStore::default();
        let logs = captured_logs(|| {
            store.set_error(Some(localized("First", None)));
            store.set_error(Some(localized("Second", None)));
        });

        let warning = logs.latest_at_least(LogLevel::Warn).expect("warning logged");
        assert!(warning.message.contains("'First' replaced by 'Second'"));
        assert_eq!(store.snapshot().error.unwrap().to_string(), "Second");
    }

    #[test]
    fn test_clearing_or_replacing_opaque_error_is_silent() {
        let store = StateStore::default();
        let logs = captured_logs(|| {
            store.set_error(Some(localized("Shown", None)));
            store.set_error(None);
            store.set_error(Some(PresenterError::opaque(anyhow::anyhow!("bad rate"))));
            store.set_error(Some(localized("Next", None)));
        });

        assert!(logs.latest_at_least(LogLevel::Warn).is_none());
    }
}
