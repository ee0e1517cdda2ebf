//! Key/value backends for the persisted credential

use crate::error::{SessionError, SessionResult};
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

/// String key/value slot with the semantics of browser `localStorage`.
///
/// Methods take `&self`; implementations provide their own interior
/// mutability the way the browser API does.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> SessionResult<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> SessionResult<()>;
    fn remove_item(&self, key: &str) -> SessionResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get_item(&self, key: &str) -> SessionResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> SessionResult<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> SessionResult<()> {
        (**self).remove_item(key)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Rc<T> {
    fn get_item(&self, key: &str) -> SessionResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> SessionResult<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> SessionResult<()> {
        (**self).remove_item(key)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get_item(&self, key: &str) -> SessionResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> SessionResult<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> SessionResult<()> {
        (**self).remove_item(key)
    }
}

/// In-process backend used natively and in tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> SessionResult<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| SessionError::storage("memory store lock poisoned"))
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> SessionResult<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> SessionResult<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> SessionResult<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}
