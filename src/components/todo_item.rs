//! Todo Item Component
//!
//! A single row: remove button, checkbox and label.

use leptos::prelude::*;

use crate::models::{Task, TaskId};

/// Label classes; `done` strikes the text through
fn label_class(done: bool) -> &'static str {
    if done {
        "todo-text done"
    } else {
        "todo-text"
    }
}

#[component]
pub fn TodoItem(
    task: Task,
    #[prop(into)] is_done: Signal<bool>,
    #[prop(into)] on_toggle_done: Callback<TaskId>,
    #[prop(into)] on_remove: Callback<TaskId>,
) -> impl IntoView {
    let id = task.id;

    view! {
        <div class="todo-item">
            <button class="remove-btn" on:click=move |_| on_remove.run(id)>"remove"</button>
            <label class="todo-label">
                <input
                    type="checkbox"
                    prop:checked=move || is_done.get()
                    on:change=move |_| on_toggle_done.run(id)
                />
                <span class=move || label_class(is_done.get())>
                    {task.message}
                </span>
            </label>
        </div>
    }
}
