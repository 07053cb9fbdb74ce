//! Validation and business rules over the todo store.
//!
//! # Design
//! The service owns a constructor-injected [`TodoStore`] and is the only
//! component that mutates it. Handlers stay thin because every rule lives
//! here: title trimming and validation, toggle-as-inversion, partial
//! updates, and the derived stats/filter projections. Everything is
//! synchronous and in-memory; callers that serve concurrent requests are
//! expected to serialize mutations around the service (the HTTP layer does
//! so with a write lock).

use crate::error::TodoError;
use crate::store::TodoStore;
use crate::types::{Todo, TodoPatch, TodoStats};

/// Business-rule layer for todo operations.
#[derive(Debug, Default)]
pub struct TodoService {
    store: TodoStore,
}

impl TodoService {
    pub fn new(store: TodoStore) -> Self {
        Self { store }
    }

    /// Create a todo from a raw title. The title is trimmed before storage
    /// and must be non-empty afterwards; new todos always start active.
    pub fn create(&mut self, title: &str) -> Result<Todo, TodoError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(TodoError::title_required());
        }
        Ok(self.store.insert(title, false))
    }

    /// All todos, optionally narrowed by completion status. A pure
    /// projection over the store: insertion order is preserved and the
    /// store is never mutated.
    pub fn list(&self, filter: Option<bool>) -> Vec<Todo> {
        self.store
            .all()
            .iter()
            .filter(|todo| filter.map_or(true, |completed| todo.completed == completed))
            .cloned()
            .collect()
    }

    pub fn get(&self, id: u64) -> Result<Todo, TodoError> {
        self.store.find_by_id(id).cloned().ok_or(TodoError::NotFound)
    }

    /// Invert the completed flag of an existing todo.
    ///
    /// The flag is negated from its current value, never assigned
    /// outright, so applying toggle twice restores the original state.
    pub fn toggle(&mut self, id: u64) -> Result<Todo, TodoError> {
        let completed = self
            .store
            .find_by_id(id)
            .ok_or(TodoError::NotFound)?
            .completed;
        let patch = TodoPatch {
            title: None,
            completed: Some(!completed),
        };
        self.store.replace(id, patch).cloned().ok_or(TodoError::NotFound)
    }

    /// Apply a partial update. The patch must carry at least one field and
    /// a title, when present, must be non-blank after trimming. Input is
    /// validated before the id is looked up.
    pub fn update(&mut self, id: u64, patch: TodoPatch) -> Result<Todo, TodoError> {
        if patch.is_empty() {
            return Err(TodoError::Validation("Nothing to update".to_string()));
        }
        let title = match patch.title {
            Some(raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return Err(TodoError::title_required());
                }
                Some(trimmed.to_string())
            }
            None => None,
        };
        let normalized = TodoPatch {
            title,
            completed: patch.completed,
        };
        self.store.replace(id, normalized).cloned().ok_or(TodoError::NotFound)
    }

    /// Remove a todo permanently and return it as confirmation. The freed
    /// id is never reassigned.
    pub fn delete(&mut self, id: u64) -> Result<Todo, TodoError> {
        let removed = self.store.find_by_id(id).cloned().ok_or(TodoError::NotFound)?;
        self.store.remove(id);
        Ok(removed)
    }

    /// Open and completed counts at call time. Like `list`, a pure
    /// projection; nothing is cached.
    pub fn stats(&self) -> TodoStats {
        let total = self.store.all().len();
        let completed_count = self
            .store
            .all()
            .iter()
            .filter(|todo| todo.completed)
            .count();
        TodoStats {
            items_left: total - completed_count,
            completed_count,
        }
    }
}
