//! Session change listeners and subscription handles.
//!
//! Providers keep a `SessionListeners` and call `notify()` after each
//! sign-in/sign-out. Each subscriber holds a `Subscription`; dropping it
//! removes the listener.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError, Weak};

use super::Session;

/// Callback invoked with the new session.
pub type SessionListener = Box<dyn Fn(&Session) + Send + Sync>;

struct ListenerTable {
    next_id: u64,
    listeners: Vec<(u64, SessionListener)>,
}

/// Registry of session listeners.
///
/// Listeners run in registration order while the table is locked; a listener
/// must not subscribe or unsubscribe from within its callback.
pub struct SessionListeners {
    table: Arc<Mutex<ListenerTable>>,
}

impl SessionListeners {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            table: Arc::new(Mutex::new(ListenerTable {
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    /// Register a listener.
    pub fn subscribe(&self, listener: SessionListener) -> Subscription {
        let mut table = self.table.lock().unwrap_or_else(PoisonError::into_inner);
        let id = table.next_id;
        table.next_id += 1;
        table.listeners.push((id, listener));

        Subscription {
            id,
            table: Arc::downgrade(&self.table),
        }
    }

    /// Call every registered listener with `session`.
    pub fn notify(&self, session: &Session) {
        let table = self.table.lock().unwrap_or_else(PoisonError::into_inner);
        log::trace!("notifying {} session listener(s)", table.listeners.len());
        for (_, listener) in table.listeners.iter() {
            listener(session);
        }
    }

    /// Number of live subscriptions.
    pub fn len(&self) -> usize {
        self.table
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .listeners
            .len()
    }

    /// True when nobody is subscribed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for SessionListeners {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SessionListeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionListeners")
            .field("listeners", &self.len())
            .finish()
    }
}

/// Handle for a registered listener.
///
/// The listener is removed when the handle is dropped.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    table: Weak<Mutex<ListenerTable>>,
}

impl Subscription {
    /// Remove the listener.
    pub fn unsubscribe(self) {
        // Drop does the work
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(table) = self.table.upgrade() {
            let mut table = table.lock().unwrap_or_else(PoisonError::into_inner);
            table.listeners.retain(|(id, _)| *id != self.id);
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
