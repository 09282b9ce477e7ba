//! Todo Widget App
//!
//! Page controller: owns the todo store, wires the form and list to it, and
//! persists every change.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{AddItemForm, TodoList};
use crate::config::WidgetConfig;
use crate::models::TaskId;
use crate::storage::TodoStorage;
use crate::store::{done_count, store_add_task, store_remove_task, store_toggle_done, TodoState, TodoStateStoreFields};

#[component]
pub fn App(config: WidgetConfig) -> impl IntoView {
    let storage = TodoStorage::browser(&config);
    let persisted = storage.load();
    log::info!("[APP] Loaded {} tasks", persisted.list.len());

    let store = Store::new(TodoState::from_persisted(persisted));
    let stale_done_entries = config.stale_done_entries;

    // Write both entries whenever the list or the completion map changes
    Effect::new(move |_| {
        let list = store.list().get();
        let done_map = store.done_map().get();
        storage.save(&list, &done_map);
    });

    let on_add = Callback::new(move |message: String| {
        store_add_task(&store, message);
    });
    let on_toggle_done = Callback::new(move |id: TaskId| store_toggle_done(&store, id));
    let on_remove = Callback::new(move |id: TaskId| store_remove_task(&store, id, stale_done_entries));

    view! {
        <main class="todo-page">
            <AddItemForm on_add=on_add />

            <TodoList
                list=Signal::derive(move || store.list().get())
                done_map=Signal::derive(move || store.done_map().get())
                on_toggle_done=on_toggle_done
                on_remove=on_remove
            />

            <p class="item-count">
                {move || {
                    let list = store.list().read();
                    let done = store.done_map().with(|done_map| done_count(&list, done_map));
                    format!("{} items, {} done", list.len(), done)
                }}
            </p>
        </main>
    }
}
