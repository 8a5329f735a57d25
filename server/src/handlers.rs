//! Route handlers for the six todo operations.
//!
//! Each handler validates its input before touching the store, so a bad title
//! is rejected with 400 even when the target id does not exist.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use todo_core::{timestamp_now, validate_title, CreateTodo, Todo, UpdateTodo};

use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::AppState;

/// Body of a successful delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

pub async fn create_todo(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateTodo>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let title = validate_title(input.title.as_deref())?;
    let todo = state.repo.insert(&Todo::new(title)).await?;
    tracing::info!(id = %todo.id, "todo created");
    Ok((StatusCode::CREATED, Json(todo)))
}

pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = state.repo.list().await.map_err(|e| {
        tracing::error!(error = %e, "failed to list todos");
        ApiError::FetchFailed
    })?;
    Ok(Json(todos))
}

pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, ApiError> {
    state
        .repo
        .find_by_id(&id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(input): JsonBody<UpdateTodo>,
) -> Result<Json<Todo>, ApiError> {
    let title = input
        .title
        .as_deref()
        .map(|title| validate_title(Some(title)))
        .transpose()?;

    let todo = state
        .repo
        .update(&id, title.as_deref(), input.status.as_deref(), &timestamp_now())
        .await?
        .ok_or(ApiError::NotFound)?;
    tracing::info!(id = %todo.id, status = %todo.status, "todo updated");
    Ok(Json(todo))
}

pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    if !state.repo.delete(&id).await? {
        return Err(ApiError::NotFound);
    }
    tracing::info!(%id, "todo deleted");
    Ok(Json(MessageResponse::new("Todo deleted successfully")))
}

pub async fn delete_all_todos(
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, ApiError> {
    let removed = state.repo.delete_all().await?;
    tracing::info!(removed, "all todos deleted");
    Ok(Json(MessageResponse::new("All todos deleted successfully")))
}
