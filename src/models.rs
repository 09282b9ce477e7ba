//! Frontend Models
//!
//! Data structures persisted to browser storage.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Task identifier
pub type TaskId = u32;

/// Completion flags keyed by task id.
///
/// Serialized as a JSON object with stringified ids as keys.
pub type DoneMap = BTreeMap<TaskId, bool>;

/// A single todo entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub message: String,
}

impl Task {
    pub fn new(id: TaskId, message: impl Into<String>) -> Self {
        Self {
            id,
            message: message.into(),
        }
    }
}

/// Completion flags as stored; keys may be any string
pub type StoredDoneMap = BTreeMap<String, bool>;

/// Keep the stored flags whose keys are task ids
pub fn done_map_from_stored(stored: StoredDoneMap) -> DoneMap {
    stored
        .into_iter()
        .filter_map(|(key, done)| key.parse::<TaskId>().ok().map(|id| (id, done)))
        .collect()
}

/// Flag for `id`, false when the map has no entry
pub fn is_done(done_map: &DoneMap, id: TaskId) -> bool {
    done_map.get(&id).copied().unwrap_or(false)
}

/// List shown when nothing usable is stored yet
pub fn default_tasks() -> Vec<Task> {
    vec![
        Task::new(1, "Apple"),
        Task::new(2, "Banana"),
        Task::new(3, "Cherry"),
    ]
}
