//! Domain type for a single todo record.
//!
//! # Design
//! The JSON dataset uses `_id` for the identifier field (hex object-id
//! strings), so the Rust field carries a serde rename. Records are plain
//! data and are never mutated after the store deserializes them.

use serde::{Deserialize, Serialize};

/// A single todo record as loaded from the dataset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    /// Opaque unique identifier, assigned in the dataset. Serialized as
    /// `_id` to match the source JSON.
    #[serde(rename = "_id")]
    pub id: String,
    /// The person responsible for the task.
    pub owner: String,
    /// `true` means the task is complete.
    pub status: bool,
    /// Free-text description of the task.
    pub body: String,
    /// Free-form category tag (not an enum in the source data).
    pub category: String,
}
