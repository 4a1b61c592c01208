//! Error types for the todo store and query engine.
//!
//! # Design
//! Loading and querying fail in different worlds: `LoadError` is fatal at
//! construction (the store either loads completely or not at all), while
//! `QueryError` is a per-query client error that leaves the store untouched.
//! A lookup miss is deliberately NOT an error — `TodoStore::get` returns
//! `Option` so the not-found path stays allocation-free.

use std::fmt;

/// Errors raised while constructing a `TodoStore` from a data file.
#[derive(Debug)]
pub enum LoadError {
    /// The data file could not be read.
    Io(std::io::Error),

    /// The file contents were not a valid JSON array of todo records.
    Json(serde_json::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "failed to read todo data: {e}"),
            LoadError::Json(e) => write!(f, "failed to parse todo data: {e}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Json(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        LoadError::Io(e)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        LoadError::Json(e)
    }
}

/// Client-input errors raised while evaluating a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The `limit` parameter could not be parsed as a base-10 integer.
    /// Carries the raw value for the client-facing message.
    BadLimit(String),
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::BadLimit(raw) => {
                write!(f, "Specified limit '{raw}' can't be parsed to an integer")
            }
        }
    }
}

impl std::error::Error for QueryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_limit_message_includes_raw_value() {
        let err = QueryError::BadLimit("abc".to_string());
        assert_eq!(
            err.to_string(),
            "Specified limit 'abc' can't be parsed to an integer"
        );
    }
}
