//! Domain types for the todo service.
//!
//! # Design
//! Ids are server-assigned monotonic integers, so the wire shape of a todo
//! is stable and ordering-friendly. `TodoStats` serializes with camelCase
//! keys because that is the shape the frontend consumes.

use serde::{Deserialize, Serialize};

/// A single todo record as stored and as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    pub title: String,
    pub completed: bool,
}

/// Partial field update applied by `TodoStore::replace`. Fields left as
/// `None` keep their current value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

impl TodoPatch {
    /// True when the patch carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.completed.is_none()
    }
}

/// Aggregate counts derived from the collection: todos still open and
/// todos already completed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TodoStats {
    pub items_left: usize,
    pub completed_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serializes_to_json() {
        let todo = Todo {
            id: 1,
            title: "Test".to_string(),
            completed: false,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["title"], "Test");
        assert_eq!(json["completed"], false);
    }

    #[test]
    fn stats_serialize_with_camel_case_keys() {
        let stats = TodoStats {
            items_left: 2,
            completed_count: 1,
        };
        let json = serde_json::to_value(stats).unwrap();
        assert_eq!(json["itemsLeft"], 2);
        assert_eq!(json["completedCount"], 1);
    }

    #[test]
    fn patch_all_fields_optional() {
        let patch: TodoPatch = serde_json::from_str("{}").unwrap();
        assert!(patch.is_empty());
    }

    #[test]
    fn patch_partial_fields() {
        let patch: TodoPatch = serde_json::from_str(r#"{"title":"New title"}"#).unwrap();
        assert_eq!(patch.title.as_deref(), Some("New title"));
        assert!(patch.completed.is_none());
        assert!(!patch.is_empty());
    }
}
