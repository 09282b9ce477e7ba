//! Todo List Component
//!
//! Renders one `TodoItem` per task, in list order.

use leptos::prelude::*;

use crate::components::TodoItem;
use crate::models::{is_done, DoneMap, Task, TaskId};

#[component]
pub fn TodoList(
    #[prop(into)] list: Signal<Vec<Task>>,
    #[prop(into)] done_map: Signal<DoneMap>,
    #[prop(into)] on_toggle_done: Callback<TaskId>,
    #[prop(into)] on_remove: Callback<TaskId>,
) -> impl IntoView {
    // Ids are not guaranteed unique, so position and text are part of the key
    let rows = move || list.get().into_iter().enumerate().collect::<Vec<_>>();

    view! {
        <div class="todo-list">
            <For
                each=rows
                key=|(position, task)| (*position, task.id, task.message.clone())
                children=move |(_, task)| {
                    let id = task.id;
                    let done = Signal::derive(move || done_map.with(|map| is_done(map, id)));
                    view! {
                        <TodoItem
                            task=task
                            is_done=done
                            on_toggle_done=on_toggle_done
                            on_remove=on_remove
                        />
                    }
                }
            />
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use crate::components::test_support::{dispatch, mount_root, tick};
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn checkboxes(root: &web_sys::HtmlElement) -> Vec<web_sys::HtmlInputElement> {
        let nodes = root.query_selector_all("input[type=checkbox]").unwrap();
        (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .map(|node| node.unchecked_into())
            .collect()
    }

    fn label_classes(root: &web_sys::HtmlElement) -> Vec<String> {
        let nodes = root.query_selector_all(".todo-text").unwrap();
        (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .map(|node| node.unchecked_into::<web_sys::Element>().class_name())
            .collect()
    }

    #[wasm_bindgen_test]
    async fn rows_reflect_completion_map_and_report_actions() {
        let list = RwSignal::new(vec![Task::new(1, "Apple"), Task::new(2, "Banana")]);
        let mut done = DoneMap::new();
        done.insert(2, true);
        let done_map = RwSignal::new(done);
        let toggled = RwSignal::new(Vec::<TaskId>::new());
        let removed = RwSignal::new(Vec::<TaskId>::new());

        let root = mount_root();
        let _handle = leptos::mount::mount_to(root.clone(), move || {
            view! {
                <TodoList
                    list=list
                    done_map=done_map
                    on_toggle_done=move |id: TaskId| toggled.update(|v| v.push(id))
                    on_remove=move |id: TaskId| removed.update(|v| v.push(id))
                />
            }
        });
        tick().await;

        let boxes = checkboxes(&root);
        assert_eq!(boxes.len(), 2);
        assert!(!boxes[0].checked(), "absent from the map means not done");
        assert!(boxes[1].checked());
        assert_eq!(label_classes(&root), vec!["todo-text", "todo-text done"]);

        dispatch(&boxes[0], "change");
        let remove_buttons = root.query_selector_all(".remove-btn").unwrap();
        let second_remove = remove_buttons.get(1).unwrap();
        dispatch(&second_remove, "click");
        assert_eq!(toggled.get_untracked(), vec![1]);
        assert_eq!(removed.get_untracked(), vec![2]);

        done_map.update(|map| {
            map.insert(1, true);
        });
        tick().await;
        assert!(checkboxes(&root)[0].checked());
        assert_eq!(label_classes(&root), vec!["todo-text done", "todo-text done"]);
    }
}
