//! Domain record and request payloads for the todo service.
//!
//! # Design
//! `Todo` is both the persisted row and the response body, so a single
//! `camelCase` rename keeps the JSON field names and the SQLite column names
//! in lockstep. Request payloads use `Option` for every field: an absent or
//! `null` field and a missing body key are treated the same way, and the
//! handler decides what "missing" means for each operation.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Status assigned to every newly created todo.
pub const DEFAULT_STATUS: &str = "todo";

/// A single persisted todo item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct Todo {
    pub id: String,
    pub title: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

impl Todo {
    /// Build a fresh record with a random id, the default status, and
    /// `createdAt == updatedAt`. `title` must already be validated.
    pub fn new(title: impl Into<String>) -> Self {
        let now = timestamp_now();
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            status: DEFAULT_STATUS.to_string(),
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

/// Request payload for `POST /todos`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTodo {
    #[serde(default)]
    pub title: Option<String>,
}

/// Request payload for `PUT /todos/{id}`. Only the fields present in the JSON
/// are applied; omitted fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTodo {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Current UTC time as ISO-8601 with millisecond precision, e.g.
/// `2024-05-01T12:00:00.000Z`. Fixed width, so string order is time order.
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
