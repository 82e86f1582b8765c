//! View model for the single to-do list.
//!
//! Holds the list as ordered in-memory state. Edits are local; only
//! `load` talks to the server, through the list use-case.

use tracing::{debug, error};

use crate::domain::entities::ToDo;
use crate::domain::usecases::ListToDosUseCase;

/// A to-do as the UI holds it. `id` is `None` until the server assigns one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalToDo {
    pub id: Option<String>,
    pub description: String,
    pub done: bool,
}

impl From<ToDo> for LocalToDo {
    fn from(to_do: ToDo) -> Self {
        Self {
            id: Some(to_do.id),
            description: to_do.description,
            done: to_do.is_done,
        }
    }
}

pub struct ToDoList<U> {
    list_to_dos: U,
    to_dos: Vec<LocalToDo>,
}

impl<U: ListToDosUseCase> ToDoList<U> {
    pub fn new(list_to_dos: U) -> Self {
        Self {
            list_to_dos,
            to_dos: Vec::new(),
        }
    }

    pub fn to_dos(&self) -> &[LocalToDo] {
        &self.to_dos
    }

    /// Replace local state with the server's list. Failures are logged and
    /// leave the current state in place.
    pub async fn load(&mut self) {
        match self.list_to_dos.list_to_dos().await {
            Ok(to_dos) => {
                debug!(count = to_dos.len(), "loaded to-dos");
                self.to_dos = to_dos.into_iter().map(LocalToDo::from).collect();
            }
            Err(err) => error!(error = %err, "failed to load to-dos"),
        }
    }

    /// Append a blank, not-done entry.
    pub fn add_to_do(&mut self) {
        self.to_dos.push(LocalToDo::default());
    }

    pub fn change_description(&mut self, index: usize, description: impl Into<String>) -> bool {
        match self.to_dos.get_mut(index) {
            Some(to_do) => {
                to_do.description = description.into();
                true
            }
            None => false,
        }
    }

    pub fn toggle_done(&mut self, index: usize) -> bool {
        match self.to_dos.get_mut(index) {
            Some(to_do) => {
                to_do.done = !to_do.done;
                true
            }
            None => false,
        }
    }

    pub fn delete_to_do(&mut self, index: usize) -> bool {
        if index >= self.to_dos.len() {
            return false;
        }
        self.to_dos.remove(index);
        true
    }
}
