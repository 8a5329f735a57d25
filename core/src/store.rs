//! Persistence for todo records.
//!
//! # Design
//! `TodoRepository` is the seam the HTTP layer depends on; it receives an
//! `Arc<dyn TodoRepository>` at construction instead of reaching for a global
//! handle. `SqliteTodoRepository` is the only implementation and owns a
//! process-wide `SqlitePool`.
//!
//! Update and delete are single conditional statements, so "does the id
//! exist" and "mutate it" cannot interleave with another request.

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::error::StoreError;
use crate::schema;
use crate::types::Todo;

#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Insert a new record and return it as stored.
    async fn insert(&self, todo: &Todo) -> Result<Todo, StoreError>;

    /// Every stored record, in no particular order.
    async fn list(&self) -> Result<Vec<Todo>, StoreError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Todo>, StoreError>;

    /// Replace `title` and `status` when given, keep them otherwise, and always
    /// set `updatedAt`. Returns `None` when no record has this id.
    async fn update(
        &self,
        id: &str,
        title: Option<&str>,
        status: Option<&str>,
        updated_at: &str,
    ) -> Result<Option<Todo>, StoreError>;

    /// Returns `false` when no record has this id.
    async fn delete(&self, id: &str) -> Result<bool, StoreError>;

    /// Returns the number of records removed.
    async fn delete_all(&self) -> Result<u64, StoreError>;
}

/// SQLite-backed repository.
#[derive(Debug, Clone)]
pub struct SqliteTodoRepository {
    pool: SqlitePool,
}

impl SqliteTodoRepository {
    /// Open (creating if missing) the database at `database_url` and ensure
    /// the todo table exists.
    ///
    /// In-memory databases live only as long as their connection, so they are
    /// pinned to one connection that is never idled out or recycled.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        let pool_options = if is_in_memory(database_url) {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(max_connections)
        };

        let pool = pool_options.connect_with(options).await?;
        tracing::debug!(database_url, "opened sqlite pool");

        let repo = Self::from_pool(pool);
        repo.init_schema().await?;
        Ok(repo)
    }

    /// Wrap an existing pool. The schema is not touched.
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn init_schema(&self) -> Result<(), StoreError> {
        sqlx::query(schema::CREATE_TABLE).execute(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close the pool. Later operations fail with a pool-closed error.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl TodoRepository for SqliteTodoRepository {
    async fn insert(&self, todo: &Todo) -> Result<Todo, StoreError> {
        let stored = sqlx::query_as::<_, Todo>(schema::INSERT)
            .bind(&todo.id)
            .bind(&todo.title)
            .bind(&todo.status)
            .bind(&todo.created_at)
            .bind(&todo.updated_at)
            .fetch_one(&self.pool)
            .await?;
        Ok(stored)
    }

    async fn list(&self) -> Result<Vec<Todo>, StoreError> {
        let todos = sqlx::query_as::<_, Todo>(schema::SELECT_ALL)
            .fetch_all(&self.pool)
            .await?;
        Ok(todos)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Todo>, StoreError> {
        let todo = sqlx::query_as::<_, Todo>(schema::SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(todo)
    }

    async fn update(
        &self,
        id: &str,
        title: Option<&str>,
        status: Option<&str>,
        updated_at: &str,
    ) -> Result<Option<Todo>, StoreError> {
        let todo = sqlx::query_as::<_, Todo>(schema::UPDATE_BY_ID)
            .bind(title)
            .bind(status)
            .bind(updated_at)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(todo)
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let result = sqlx::query(schema::DELETE_BY_ID)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_all(&self) -> Result<u64, StoreError> {
        let result = sqlx::query(schema::DELETE_ALL).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}
