//! HTTP surface over the todo store.
//!
//! # Design
//! The router is thin glue: it parses the query string into the core's
//! parameter mapping, calls the query engine, and maps outcomes to status
//! codes. The store is shared as an `Arc` with no lock — it is immutable
//! after load, so concurrent requests need no coordination.
//!
//! Query pairs are extracted as a `Vec<(String, String)>` rather than a
//! map so repeated keys survive extraction; the engine then consults only
//! the first value of each key, matching URL query-string semantics.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tokio::net::TcpListener;

use todo_api_core::{filter_todos, ParamMap, QueryError, Todo, TodoStore};

pub type SharedStore = Arc<TodoStore>;

/// JSON body for client-facing errors.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

pub fn app(store: SharedStore) -> Router {
    Router::new()
        .route("/api/todos", get(list_todos))
        .route("/api/todos/{id}", get(get_todo))
        .with_state(store)
}

pub async fn run(listener: TcpListener, store: SharedStore) -> Result<(), std::io::Error> {
    axum::serve(listener, app(store)).await
}

/// Fold extracted query pairs into the engine's parameter mapping,
/// preserving value order so first-occurrence-wins semantics hold.
fn to_param_map(pairs: Vec<(String, String)>) -> ParamMap {
    let mut params = ParamMap::new();
    for (key, value) in pairs {
        params.entry(key).or_default().push(value);
    }
    params
}

async fn list_todos(
    State(store): State<SharedStore>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<Todo>>, (StatusCode, Json<ErrorBody>)> {
    let params = to_param_map(pairs);
    match filter_todos(store.all(), &params) {
        Ok(todos) => Ok(Json(todos.into_iter().cloned().collect())),
        Err(err @ QueryError::BadLimit(_)) => {
            tracing::warn!(error = %err, "rejected query");
            Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    message: err.to_string(),
                }),
            ))
        }
    }
}

async fn get_todo(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, (StatusCode, Json<ErrorBody>)> {
    match store.get(&id) {
        Some(todo) => Ok(Json(todo.clone())),
        None => {
            // A miss is a normal outcome, not a server fault.
            tracing::debug!(%id, "no todo with that id");
            Err((
                StatusCode::NOT_FOUND,
                Json(ErrorBody {
                    message: format!("No todo with id {id} was found."),
                }),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn param_map_keeps_values_in_first_occurrence_order() {
        let pairs = vec![
            ("owner".to_string(), "Fry".to_string()),
            ("limit".to_string(), "5".to_string()),
            ("owner".to_string(), "Blanche".to_string()),
        ];
        let params = to_param_map(pairs);
        assert_eq!(params["owner"], vec!["Fry", "Blanche"]);
        assert_eq!(params["limit"], vec!["5"]);
    }

    #[test]
    fn error_body_serializes_message() {
        let body = ErrorBody {
            message: "No todo with id x was found.".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["message"], "No todo with id x was found.");
    }
}
