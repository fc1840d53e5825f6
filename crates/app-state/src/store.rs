//! The reactive document store.
//!
//! `Store` owns the one live `Document`, merges patches into it, and notifies
//! subscribers synchronously in subscription order. Every `set` produces exactly
//! one notification round, even when the patch changes nothing.

use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use crate::snapshot::Snapshot;
use crate::state::{Document, DocumentPatch};

/// Callback invoked with the document after every change.
pub type SubscriberFn = Box<dyn FnMut(&Document) -> anyhow::Result<()>>;

/// Handle returned by `subscribe`, used to deregister the callback.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Subscriber {
    id: SubscriptionId,
    callback: SubscriberFn,
}

pub struct Store {
    state: Document,
    subscribers: Vec<Subscriber>,
    next_subscription: u64,
}

impl Store {
    pub fn new(state: Document) -> Self {
        Self {
            state,
            subscribers: Vec::new(),
            next_subscription: 1,
        }
    }

    /// The current live document.
    pub fn state(&self) -> &Document {
        &self.state
    }

    /// Merge `patch` into the document and notify.
    pub fn set(&mut self, patch: DocumentPatch) {
        patch.apply_to(&mut self.state);
        self.notify();
    }

    /// Replace the whole document and notify.
    pub fn replace_state(&mut self, state: Document) {
        self.state = state;
        self.notify();
    }

    /// Register a callback that receives the full document.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&Document) -> anyhow::Result<()> + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push(Subscriber {
            id,
            callback: Box::new(callback),
        });
        id
    }

    /// Register a callback that receives `selector(document)` instead of the
    /// document itself.
    pub fn subscribe_with<T, S, F>(&mut self, selector: S, mut callback: F) -> SubscriptionId
    where
        S: Fn(&Document) -> T + 'static,
        F: FnMut(T) -> anyhow::Result<()> + 'static,
    {
        self.subscribe(move |doc| callback(selector(doc)))
    }

    /// Deregister a callback. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|s| s.id != id);
        self.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Deep copy of the document without selection and hover.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state)
    }

    /// Install a snapshot as the live document, clearing selection and hover.
    pub fn restore_snapshot(&mut self, snapshot: &Snapshot) {
        self.replace_state(snapshot.to_document());
    }

    fn notify(&mut self) {
        let state = &self.state;
        for subscriber in &mut self.subscribers {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| (subscriber.callback)(state)));
            match outcome {
                Ok(Ok(())) => {}
                Ok(Err(err)) => {
                    tracing::error!(
                        subscription = subscriber.id.0,
                        error = %err,
                        "Subscriber failed"
                    );
                }
                Err(_) => {
                    tracing::error!(subscription = subscriber.id.0, "Subscriber panicked");
                }
            }
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(Document::new())
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
