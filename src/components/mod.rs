//! UI Components
//!
//! Leptos components for the todo page.

mod add_item_form;
mod todo_item;
mod todo_list;

pub use add_item_form::AddItemForm;
pub use todo_item::TodoItem;
pub use todo_list::TodoList;
