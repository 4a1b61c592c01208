//! Read-only todo store and query engine.
//!
//! # Overview
//! Loads a JSON array of todo records once at startup and answers queries
//! over it: lookup by id, and a filter/sort/limit pipeline driven by a
//! parameter mapping. The store is immutable after construction, so any
//! number of concurrent queries may run against it without coordination.
//!
//! # Design
//! - `TodoStore` owns the records; everything else borrows from it.
//! - The pipeline in `query` is a chain of pure functions returning
//!   borrowed records, so a query never copies record data.
//! - `TodoStore::get` returns `Option` rather than an error type; a
//!   missing id is a normal outcome, not an exceptional one.
//! - HTTP routing and serialization live in the server crate; this crate
//!   consumes and produces in-memory values only.

pub mod error;
pub mod query;
pub mod store;
pub mod types;

pub use error::{LoadError, QueryError};
pub use query::{filter_todos, ParamMap};
pub use store::TodoStore;
pub use types::Todo;
