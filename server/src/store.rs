//! In-memory storage for todo records.
//!
//! # Design
//! The store owns the collection and the id counter and nothing else: no
//! validation, no business rules. Records live in a `Vec` because insertion
//! order is part of the listing contract. The counter only ever increments,
//! so an id is never reissued even after its record is deleted. State is
//! ephemeral; a process restart starts from an empty store.

use crate::types::{Todo, TodoPatch};

/// Owner of the todo collection and the next-id counter.
///
/// Construct one per server (or per test) with [`TodoStore::new`]; there is
/// no global instance.
#[derive(Debug)]
pub struct TodoStore {
    todos: Vec<Todo>,
    next_id: u64,
}

impl TodoStore {
    /// Empty collection, counter starts at 1.
    pub fn new() -> Self {
        Self {
            todos: Vec::new(),
            next_id: 1,
        }
    }

    /// Assign the next id, append the record, return it.
    pub fn insert(&mut self, title: &str, completed: bool) -> Todo {
        let todo = Todo {
            id: self.next_id,
            title: title.to_string(),
            completed,
        };
        self.next_id += 1;
        self.todos.push(todo.clone());
        todo
    }

    /// All todos in insertion order.
    pub fn all(&self) -> &[Todo] {
        &self.todos
    }

    pub fn find_by_id(&self, id: u64) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    /// Remove the record with `id`. Returns whether a record was removed.
    /// The id counter is left untouched.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.todos.len();
        self.todos.retain(|todo| todo.id != id);
        self.todos.len() != before
    }

    /// Apply a partial update in place. Fields absent from the patch keep
    /// their current value. Returns the updated record, or `None` if `id`
    /// is not present.
    pub fn replace(&mut self, id: u64, patch: TodoPatch) -> Option<&Todo> {
        let todo = self.todos.iter_mut().find(|todo| todo.id == id)?;
        if let Some(title) = patch.title {
            todo.title = title;
        }
        if let Some(completed) = patch.completed {
            todo.completed = completed;
        }
        Some(todo)
    }
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}
