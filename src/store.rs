//! Todo State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::StaleDoneEntries;
use crate::models::{is_done, DoneMap, Task, TaskId};
use crate::storage::PersistedTodos;

/// In-memory page state with field-level reactivity
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct TodoState {
    /// Tasks in display order
    pub list: Vec<Task>,
    /// Completion flags, created on first toggle
    pub done_map: DoneMap,
    /// Last id handed out by `add`
    pub id_counter: TaskId,
}

impl TodoState {
    /// Build state from persisted data; the id counter starts at the list length
    pub fn from_persisted(persisted: PersistedTodos) -> Self {
        let id_counter = TaskId::try_from(persisted.list.len()).unwrap_or(TaskId::MAX);
        Self {
            list: persisted.list,
            done_map: persisted.done_map,
            id_counter,
        }
    }
}

// ========================
// Field Operations
// ========================

/// Advance the counter and return the new id
fn next_id(counter: &mut TaskId) -> TaskId {
    *counter = counter.saturating_add(1);
    *counter
}

/// Absent counts as not done, so the first flip sets it
fn flip_done(done_map: &mut DoneMap, id: TaskId) {
    let done = done_map.entry(id).or_insert(false);
    *done = !*done;
}

/// Remove the first task with `id`. Unknown ids leave the list untouched.
fn remove_first(list: &mut Vec<Task>, id: TaskId) -> Option<Task> {
    let index = list.iter().position(|task| task.id == id)?;
    Some(list.remove(index))
}

/// Number of tasks in `list` marked done in `done_map`
pub fn done_count(list: &[Task], done_map: &DoneMap) -> usize {
    list.iter().filter(|task| is_done(done_map, task.id)).count()
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

// ========================
// Store Helper Functions
// ========================

/// Add a task to the store
pub fn store_add_task(store: &TodoStore, message: String) -> TaskId {
    let id = next_id(&mut store.id_counter().write());
    store.list().write().push(Task::new(id, message));
    log::debug!("[STORE] Added task {}", id);
    id
}

/// Flip a task's completion flag in the store
pub fn store_toggle_done(store: &TodoStore, id: TaskId) {
    flip_done(&mut store.done_map().write(), id);
    log::debug!("[STORE] Toggled task {}", id);
}

/// Remove a task from the store by ID
pub fn store_remove_task(store: &TodoStore, id: TaskId, stale: StaleDoneEntries) {
    let removed = remove_first(&mut store.list().write(), id);
    if removed.is_none() {
        log::debug!("[STORE] No task {} to remove", id);
        return;
    }
    if stale == StaleDoneEntries::Prune {
        store.done_map().write().remove(&id);
    }
    log::debug!("[STORE] Removed task {}", id);
}
