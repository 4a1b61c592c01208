use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use todo_api_core::TodoStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let data_file = std::env::var("TODO_DATA").unwrap_or_else(|_| "data/todos.json".to_string());
    let store = Arc::new(TodoStore::from_path(&data_file)?);
    info!(records = store.size(), %data_file, "todo store loaded");

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    info!(%addr, "listening");
    todo_api_server::run(listener, store).await?;
    Ok(())
}
