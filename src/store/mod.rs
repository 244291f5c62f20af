//! Reactive key-value persistence for the three entity collections.
//!
//! A [`StoreBackend`] holds raw JSON payloads per key; the [`Store`] wraps one
//! backend with serialized read-modify-write access and a subscription
//! registry so every reader observes mutations immediately.

pub mod collection;
pub mod json_backend;
pub mod memory;

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::errors::StoreError;

pub type Result<T> = std::result::Result<T, StoreError>;

pub const TRANSACTIONS_KEY: &str = "transactions";
pub const BUDGETS_KEY: &str = "budgets";
pub const GOALS_KEY: &str = "goals";

/// Abstraction over persistence backends capable of storing one raw JSON
/// payload per key.
pub trait StoreBackend: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<String>>;
    fn write(&self, key: &str, payload: &str) -> Result<()>;
}

pub type SubscriberId = u64;

type ChangeCallback = Arc<dyn Fn(&str) + Send + Sync>;

struct Subscriber {
    key: String,
    callback: ChangeCallback,
}

/// Repository hub over an injected backend.
///
/// Mutations run under a single write lock, so concurrent read-modify-write
/// cycles are never torn: each one observes the result of the prior write.
pub struct Store {
    backend: Box<dyn StoreBackend>,
    write_lock: Mutex<()>,
    subscribers: Mutex<HashMap<SubscriberId, Subscriber>>,
    next_subscriber: AtomicU64,
}

impl Store {
    pub fn new(backend: Box<dyn StoreBackend>) -> Arc<Self> {
        Arc::new(Self {
            backend,
            write_lock: Mutex::new(()),
            subscribers: Mutex::new(HashMap::new()),
            next_subscriber: AtomicU64::new(0),
        })
    }

    pub fn read_raw(&self, key: &str) -> Result<Option<String>> {
        self.backend.read(key)
    }

    pub fn write_raw(&self, key: &str, payload: &str) -> Result<()> {
        {
            let _guard = self.write_guard()?;
            self.backend.write(key, payload)?;
        }
        self.notify(key);
        Ok(())
    }

    /// Guarded read-modify-write. The closure sees the current payload and
    /// returns the replacement, or `None` to leave the key untouched.
    /// Subscribers are notified only when a write was committed.
    pub fn update_raw<F>(&self, key: &str, apply: F) -> Result<bool>
    where
        F: FnOnce(Option<&str>) -> Result<Option<String>>,
    {
        let changed = {
            let _guard = self.write_guard()?;
            let current = self.backend.read(key)?;
            match apply(current.as_deref())? {
                Some(next) => {
                    self.backend.write(key, &next)?;
                    true
                }
                None => false,
            }
        };
        if changed {
            self.notify(key);
        }
        Ok(changed)
    }

    /// Registers a change callback for one key and returns its handle.
    pub fn subscribe<F>(&self, key: &str, callback: F) -> SubscriberId
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        let id = self.next_subscriber.fetch_add(1, Ordering::Relaxed);
        if let Ok(mut subscribers) = self.subscribers.lock() {
            subscribers.insert(
                id,
                Subscriber {
                    key: key.to_string(),
                    callback: Arc::new(callback),
                },
            );
        }
        id
    }

    pub fn unsubscribe(&self, id: SubscriberId) {
        if let Ok(mut subscribers) = self.subscribers.lock() {
            subscribers.remove(&id);
        }
    }

    /// Snapshots the matching callbacks before invoking them, so a callback
    /// may itself subscribe or unsubscribe without deadlocking the registry.
    fn notify(&self, key: &str) {
        let callbacks: Vec<ChangeCallback> = match self.subscribers.lock() {
            Ok(subscribers) => subscribers
                .values()
                .filter(|s| s.key == key)
                .map(|s| Arc::clone(&s.callback))
                .collect(),
            Err(_) => return,
        };
        for callback in callbacks {
            callback(key);
        }
    }

    fn write_guard(&self) -> Result<MutexGuard<'_, ()>> {
        self.write_lock.lock().map_err(|_| StoreError::Poisoned)
    }
}
