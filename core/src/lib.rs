//! Storage schema and domain types for the todo service.
//!
//! # Overview
//! Defines the persisted `Todo` record, the request payloads, the title
//! validator, and the SQLite-backed repository the HTTP layer talks to.
//!
//! # Design
//! - `schema` is the single place that names the table, its columns and the
//!   SQL run against it.
//! - Validation is a pure function returning `Result`; it never touches the
//!   store.
//! - `TodoRepository` is injected into the server, never a global.

pub mod error;
pub mod schema;
pub mod store;
pub mod types;
pub mod validation;

pub use error::{StoreError, ValidationError};
pub use store::{SqliteTodoRepository, TodoRepository};
pub use types::{timestamp_now, CreateTodo, Todo, UpdateTodo, DEFAULT_STATUS};
pub use validation::{validate_title, MAX_TITLE_LEN};
