//! HTTP service exposing CRUD over todo items stored in SQLite.
//!
//! # Design
//! The router holds an injected `Arc<dyn TodoRepository>` as its only state.
//! Handlers never share mutable state beyond the repository's pool.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use todo_core::TodoRepository;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod telemetry;

pub use config::{Config, ConfigError};
pub use error::ApiError;
pub use handlers::MessageResponse;

use handlers::{create_todo, delete_all_todos, delete_todo, get_todo, list_todos, update_todo};

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn TodoRepository>,
}

pub fn app(repo: Arc<dyn TodoRepository>) -> Router {
    let router: Router<AppState> = Router::new()
        .route(
            "/todos",
            get(list_todos).post(create_todo).delete(delete_all_todos),
        )
        .route("/todos/{id}", get(get_todo).put(update_todo).delete(delete_todo));
    with_middleware(router).with_state(AppState { repo })
}

/// Request tracing, and panics answered as 400 `{"error": ...}`.
pub fn with_middleware<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(TraceLayer::new_for_http())
}

/// Serve until `shutdown` resolves.
pub async fn run<F>(
    listener: TcpListener,
    repo: Arc<dyn TodoRepository>,
    shutdown: F,
) -> Result<(), std::io::Error>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app(repo))
        .with_graceful_shutdown(shutdown)
        .await
}
