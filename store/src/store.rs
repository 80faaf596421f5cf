//! The in-memory todo collection and id generator.

use crate::error::StoreError;
use crate::types::{Todo, TodoPatch};

/// Insertion-ordered collection of todos plus the next id to assign.
///
/// Ids are assigned once at creation and never reused: `next_id` only moves
/// forward, even after completed items are cleared. There is no single-item
/// delete — removal happens only through [`Store::clear_completed`].
#[derive(Debug, Clone)]
pub struct Store {
    todos: Vec<Todo>,
    next_id: u64,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    pub fn new() -> Self {
        Self {
            todos: Vec::new(),
            next_id: 1,
        }
    }

    /// Current collection in insertion order. Read-only.
    pub fn list(&self) -> &[Todo] {
        &self.todos
    }

    /// Creates a todo from `text`, trimmed, with `done = false`.
    ///
    /// `None` covers both "field missing" and "field was not a string" —
    /// the server collapses those at the boundary. Text that trims to empty
    /// is rejected the same way. A failed add leaves the collection and the
    /// id counter untouched.
    pub fn add(&mut self, text: Option<&str>) -> Result<Todo, StoreError> {
        let text = text
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(StoreError::TextRequired)?;
        let todo = Todo {
            id: self.next_id,
            text: text.to_string(),
            done: false,
        };
        self.next_id += 1;
        self.todos.push(todo.clone());
        Ok(todo)
    }

    /// Applies `patch` to the todo with `id`, in place.
    ///
    /// Provided text is trimmed but, unlike [`Store::add`], not checked for
    /// emptiness — an update may blank a todo's text. That asymmetry is
    /// observable behavior and intentional here.
    pub fn update(&mut self, id: u64, patch: TodoPatch) -> Result<Todo, StoreError> {
        let todo = self
            .todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound)?;
        if let Some(text) = patch.text {
            todo.text = text.trim().to_string();
        }
        if let Some(done) = patch.done {
            todo.done = done;
        }
        Ok(todo.clone())
    }

    /// Drops every completed todo, preserving the relative order of the
    /// rest, and returns the remaining collection. Idempotent.
    pub fn clear_completed(&mut self) -> &[Todo] {
        self.todos.retain(|t| !t.done);
        &self.todos
    }

    /// Empties the collection and restarts ids at 1. Test isolation hook;
    /// not exposed over the API.
    pub fn reset(&mut self) {
        self.todos.clear();
        self.next_id = 1;
    }
}
