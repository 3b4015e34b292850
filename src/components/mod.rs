//! UI Components
//!
//! Leptos components of the to-do shell. They only read the store and
//! dispatch commands.

mod delete_confirm_button;
mod todo_form;
mod todo_list;
mod todo_row;
mod view_controls;

pub use delete_confirm_button::DeleteConfirmButton;
pub use todo_form::TodoForm;
pub use todo_list::TodoList;
pub use todo_row::TodoRow;
pub use view_controls::ViewControls;
