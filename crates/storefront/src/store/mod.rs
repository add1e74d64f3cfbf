//! Persistent key-value store.
//!
//! The store holds structured records serialized as JSON text, namespaced
//! by logical key (see [`keys`]). Two backends sit behind one seam: a
//! directory of JSON files (the localStorage analog) and an in-memory map
//! for tests.
//!
//! # Contexts and change notifications
//!
//! A [`Store`] handle belongs to one *context* - the analog of one open
//! browser tab. [`Store::context`] opens another context over the same
//! backend, and [`Store::subscribe`] yields the change events produced by
//! writes from *other* contexts. The notification is advisory: it carries
//! only the changed key, and receivers must re-read the value rather than
//! assume anything about it.
//!
//! # Shared-resource policy
//!
//! Writes are last-writer-wins with no merge or versioning. Two contexts
//! that both read stock = 5 and both commit a decrement of 3 will leave the
//! second write in place, overselling the product. That race is an accepted
//! limitation of the design, preserved here deliberately.

mod file;
mod memory;

pub mod keys;

pub use file::FileBackend;
pub use memory::MemoryBackend;

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{Receiver, Sender, channel};
use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::warn;

/// Errors raised by the persistent store.
///
/// Malformed stored data is *not* an error: reads degrade to `None` so the
/// caller's default wins (availability over strict validation).
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying file I/O failed.
    #[error("storage i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A record could not be serialized for writing.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A change notification delivered to other contexts after a write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreEvent {
    /// The logical key that was written or removed.
    pub key: String,
}

/// Raw text storage behind the typed [`Store`] API.
pub trait Backend: Send + Sync {
    /// Read the raw text stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the backend cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write raw text under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the backend cannot be written.
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove the value under `key`. Removing an absent key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the backend cannot be written.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

struct Subscriber {
    context_id: u64,
    sender: Sender<StoreEvent>,
}

struct Shared {
    subscribers: Mutex<Vec<Subscriber>>,
    next_context: AtomicU64,
}

/// Typed handle over a shared backend, scoped to one context.
///
/// Cloning a `Store` stays within the same context; use [`Store::context`]
/// to model a second tab over the same storage.
#[derive(Clone)]
pub struct Store {
    backend: Arc<dyn Backend>,
    shared: Arc<Shared>,
    context_id: u64,
}

impl Store {
    /// Open a file-backed store rooted at `data_dir`, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the directory cannot be created.
    pub fn open(data_dir: &Path) -> Result<Self, StoreError> {
        Ok(Self::with_backend(Arc::new(FileBackend::open(data_dir)?)))
    }

    /// Open an in-memory store (used by tests).
    #[must_use]
    pub fn in_memory() -> Self {
        Self::with_backend(Arc::new(MemoryBackend::default()))
    }

    fn with_backend(backend: Arc<dyn Backend>) -> Self {
        Self {
            backend,
            shared: Arc::new(Shared {
                subscribers: Mutex::new(Vec::new()),
                next_context: AtomicU64::new(1),
            }),
            context_id: 0,
        }
    }

    /// Open another context over the same backend.
    ///
    /// Writes from the returned handle notify this handle's subscribers and
    /// vice versa, mirroring how one tab's commits are observed by others.
    #[must_use]
    pub fn context(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            shared: Arc::clone(&self.shared),
            context_id: self.shared.next_context.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// Subscribe to change notifications produced by *other* contexts.
    #[must_use]
    pub fn subscribe(&self) -> Receiver<StoreEvent> {
        let (sender, receiver) = channel();
        self.subscribers().push(Subscriber {
            context_id: self.context_id,
            sender,
        });
        receiver
    }

    /// Read and deserialize the record under `key`.
    ///
    /// Returns `None` both when the key is absent and when the stored text
    /// no longer matches the expected schema; the caller's default wins.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the backend cannot be read.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let Some(text) = self.backend.read(key)? else {
            return Ok(None);
        };
        match serde_json::from_str(&text) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                warn!(key, error = %e, "malformed stored record, falling back to default");
                Ok(None)
            }
        }
    }

    /// Serialize and persist `value` under `key`, then notify other contexts.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Serialize` if the value cannot be serialized or
    /// `StoreError::Io` if the backend cannot be written.
    pub fn put<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let text = serde_json::to_string(value)?;
        self.backend.write(key, &text)?;
        self.notify(key);
        Ok(())
    }

    /// Remove the record under `key`, then notify other contexts.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the backend cannot be written.
    pub fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.backend.remove(key)?;
        self.notify(key);
        Ok(())
    }

    /// Deliver a change event to subscribers in other contexts, pruning
    /// subscribers whose receivers are gone.
    fn notify(&self, key: &str) {
        self.subscribers().retain(|sub| {
            if sub.context_id == self.context_id {
                return true;
            }
            sub.sender
                .send(StoreEvent {
                    key: key.to_owned(),
                })
                .is_ok()
        });
    }

    fn subscribers(&self) -> std::sync::MutexGuard<'_, Vec<Subscriber>> {
        self.shared
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Record {
        name: String,
        count: u32,
    }

    #[test]
    fn test_get_absent_key() {
        let store = Store::in_memory();
        let got: Option<Record> = store.get("missing").unwrap();
        assert!(got.is_none());
    }

    #[test]
    fn test_put_then_get() {
        let store = Store::in_memory();
        let record = Record {
            name: "akira".to_owned(),
            count: 3,
        };
        store.put("k", &record).unwrap();
        assert_eq!(store.get::<Record>("k").unwrap(), Some(record));
    }

    #[test]
    fn test_malformed_record_falls_back_to_none() {
        let store = Store::in_memory();
        store.put("k", &"just a string").unwrap();
        // Schema drift: the stored text is valid JSON but not a Record.
        let got: Option<Record> = store.get("k").unwrap();
        assert!(got.is_none());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let store = Store::in_memory();
        store.put("k", &1_u32).unwrap();
        store.remove("k").unwrap();
        store.remove("k").unwrap();
        assert!(store.get::<u32>("k").unwrap().is_none());
    }

    #[test]
    fn test_other_context_is_notified() {
        let tab_a = Store::in_memory();
        let tab_b = tab_a.context();
        let events = tab_b.subscribe();

        tab_a.put("products", &vec![1, 2, 3]).unwrap();

        let event = events.try_recv().unwrap();
        assert_eq!(event.key, "products");
    }

    #[test]
    fn test_own_context_is_not_notified() {
        let tab = Store::in_memory();
        let events = tab.subscribe();

        tab.put("products", &1_u32).unwrap();

        assert!(events.try_recv().is_err());
    }

    #[test]
    fn test_clone_shares_context() {
        let tab = Store::in_memory();
        let events = tab.subscribe();

        // A clone is the same tab, so its writes stay silent here.
        tab.clone().put("k", &1_u32).unwrap();
        assert!(events.try_recv().is_err());
    }

    #[test]
    fn test_last_writer_wins() {
        let tab_a = Store::in_memory();
        let tab_b = tab_a.context();

        tab_a.put("stock", &2_u32).unwrap();
        tab_b.put("stock", &4_u32).unwrap();

        // No merge: the second write overwrites the first.
        assert_eq!(tab_a.get::<u32>("stock").unwrap(), Some(4));
    }
}
