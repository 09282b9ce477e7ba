//! Storage Adapter
//!
//! Persists the task list and completion map as JSON text in a key-value
//! store (browser `localStorage` at runtime). Reads never fail: anything
//! missing or malformed is logged and replaced by defaults.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::WidgetConfig;
use crate::models::{default_tasks, done_map_from_stored, DoneMap, StoredDoneMap, Task};

/// Common result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage-level errors
#[derive(Debug, Clone, PartialEq)]
pub enum StorageError {
    Unavailable(String),
    Read(String),
    Write(String),
    Serialize(String),
    Parse(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Unavailable(msg) => write!(f, "Storage unavailable: {}", msg),
            StorageError::Read(msg) => write!(f, "Read failed: {}", msg),
            StorageError::Write(msg) => write!(f, "Write failed: {}", msg),
            StorageError::Serialize(msg) => write!(f, "Serialize failed: {}", msg),
            StorageError::Parse(msg) => write!(f, "Parse failed: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

/// Text key-value store backing the adapter
pub trait KeyValueStore {
    /// Read the value under `key`, `None` if never written
    fn get_item(&self, key: &str) -> StorageResult<Option<String>>;

    /// Overwrite the value under `key`
    fn set_item(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// `window.localStorage`
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

impl BrowserStorage {
    pub fn open() -> StorageResult<Self> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| StorageError::Read(format!("{}: {:?}", key, e)))
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{}: {:?}", key, e)))
    }
}

/// In-memory store; clones share the same entries
#[derive(Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Task list and completion map as read back from storage
#[derive(Debug, Clone, PartialEq)]
pub struct PersistedTodos {
    pub list: Vec<Task>,
    pub done_map: DoneMap,
}

/// Reads and writes the two persisted entries
pub struct TodoStorage {
    backend: Box<dyn KeyValueStore>,
    list_key: String,
    done_map_key: String,
}

impl TodoStorage {
    pub fn new(backend: Box<dyn KeyValueStore>, config: &WidgetConfig) -> Self {
        Self {
            backend,
            list_key: config.list_key.clone(),
            done_map_key: config.done_map_key.clone(),
        }
    }

    /// Adapter over `localStorage`, or over memory if the browser refuses access
    pub fn browser(config: &WidgetConfig) -> Self {
        let backend: Box<dyn KeyValueStore> = match BrowserStorage::open() {
            Ok(storage) => Box::new(storage),
            Err(err) => {
                log::warn!("[STORAGE] {}; changes will not survive a reload", err);
                Box::new(MemoryStorage::new())
            }
        };
        Self::new(backend, config)
    }

    pub fn load(&self) -> PersistedTodos {
        PersistedTodos {
            list: self.read_or_default(&self.list_key, default_tasks),
            done_map: done_map_from_stored(
                self.read_or_default(&self.done_map_key, StoredDoneMap::new),
            ),
        }
    }

    /// Write both entries. Failures are logged and otherwise ignored.
    pub fn save(&self, list: &[Task], done_map: &DoneMap) {
        if let Err(err) = self.write_entry(&self.list_key, &list) {
            log::warn!("[STORAGE] {}", err);
        }
        if let Err(err) = self.write_entry(&self.done_map_key, done_map) {
            log::warn!("[STORAGE] {}", err);
        }
    }

    fn read_or_default<T: DeserializeOwned>(&self, key: &str, default: impl FnOnce() -> T) -> T {
        match self.read_entry(key) {
            Ok(Some(value)) => value,
            Ok(None) => default(),
            Err(err) => {
                log::error!("[STORAGE] {}; using defaults", err);
                default()
            }
        }
    }

    fn read_entry<T: DeserializeOwned>(&self, key: &str) -> StorageResult<Option<T>> {
        let text = match self.backend.get_item(key)? {
            Some(text) if !text.is_empty() => text,
            _ => return Ok(None),
        };
        serde_json::from_str(&text)
            .map(Some)
            .map_err(|e| StorageError::Parse(format!("{}: {}", key, e)))
    }

    fn write_entry<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> StorageResult<()> {
        let text = serde_json::to_string(value)
            .map_err(|e| StorageError::Serialize(format!("{}: {}", key, e)))?;
        self.backend.set_item(key, &text)
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn local_storage_round_trip() {
        let config = WidgetConfig {
            list_key: "test-list".to_string(),
            done_map_key: "test-doneMap".to_string(),
            ..WidgetConfig::default()
        };
        let backend = BrowserStorage::open().expect("localStorage should be available");
        let storage = TodoStorage::new(Box::new(backend), &config);

        let list = vec![Task::new(1, "Milk")];
        let mut done_map = DoneMap::new();
        done_map.insert(1, true);
        storage.save(&list, &done_map);

        let loaded = storage.load();
        assert_eq!(loaded.list, list);
        assert_eq!(loaded.done_map, done_map);
    }
}
