//! Immutable in-memory store of todo records.
//!
//! # Design
//! The store reads its backing JSON file exactly once, at construction.
//! Deserialization failure of the file is fatal — there is no partial load.
//! After that the record sequence never changes, so accessors hand out
//! borrows and the store can be shared across threads freely.

use std::fs;
use std::path::Path;

use crate::error::LoadError;
use crate::types::Todo;

/// Holds every todo record for the lifetime of the process, in the order
/// they appear in the backing JSON array.
#[derive(Debug)]
pub struct TodoStore {
    todos: Vec<Todo>,
}

impl TodoStore {
    /// Load the store from a JSON file containing an array of records.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Load the store from an in-memory JSON string.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let todos = serde_json::from_str(json)?;
        Ok(Self { todos })
    }

    /// Number of records held.
    pub fn size(&self) -> usize {
        self.todos.len()
    }

    /// Find the record with the given id, if any. Ids are unique, so the
    /// first match is the only match. Any string is a valid argument.
    pub fn get(&self, id: &str) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    /// All records, in load order.
    pub fn all(&self) -> &[Todo] {
        &self.todos
    }
}
