//! UI-framework-free view models.

pub mod resizable_input;
pub mod to_do_list;

pub use resizable_input::ResizableInputText;
pub use to_do_list::{LocalToDo, ToDoList};
