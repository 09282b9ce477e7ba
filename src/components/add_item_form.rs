//! Add Item Form Component
//!
//! Text input plus submit button for creating tasks.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Text reported for a submitted draft. Empty results are passed through.
fn submitted_message(draft: &str) -> String {
    draft.trim().to_string()
}

/// Form reporting the trimmed input text on submit, then clearing it
#[component]
pub fn AddItemForm(
    #[prop(into)] on_add: Callback<String>,
) -> impl IntoView {
    let (draft, set_draft) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_add.run(submitted_message(&draft.get_untracked()));
        set_draft.set(String::new());
    };

    view! {
        <form class="add-item-form" on:submit=submit>
            <input
                type="text"
                placeholder="add todo"
                prop:value=move || draft.get()
                on:input=move |ev| {
                    if let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) {
                        set_draft.set(input.value());
                    }
                }
            />
            <button type="submit">"add"</button>
        </form>
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use crate::components::test_support::{dispatch, mount_root, tick};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn submit_reports_trimmed_text_and_clears_input() {
        let submitted = RwSignal::new(Vec::<String>::new());
        let root = mount_root();
        let _handle = leptos::mount::mount_to(root.clone(), move || {
            view! { <AddItemForm on_add=move |message: String| submitted.update(|v| v.push(message)) /> }
        });

        let input: web_sys::HtmlInputElement = root.query_selector("input").unwrap().unwrap().unchecked_into();
        let form = root.query_selector("form").unwrap().unwrap();

        input.set_value("  Milk  ");
        dispatch(&input, "input");
        dispatch(&form, "submit");
        tick().await;

        assert_eq!(submitted.get_untracked(), vec!["Milk".to_string()]);
        assert_eq!(input.value(), "");

        input.set_value("   ");
        dispatch(&input, "input");
        dispatch(&form, "submit");
        tick().await;

        assert_eq!(submitted.get_untracked(), vec!["Milk".to_string(), String::new()]);
        assert_eq!(input.value(), "");
    }
}
