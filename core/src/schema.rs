//! Table definition and every SQL statement that touches it.
//!
//! Column names are camelCase so rows map directly onto [`crate::Todo`].
//! All five columns are `NOT NULL`; no other constraint lives in the database.

/// Name of the single table holding todo records.
pub const TABLE_NAME: &str = "todos_table";

/// Column names in declaration order.
pub const COLUMNS: [&str; 5] = ["id", "title", "status", "createdAt", "updatedAt"];

pub const CREATE_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS todos_table (
    id        TEXT PRIMARY KEY NOT NULL,
    title     TEXT NOT NULL,
    status    TEXT NOT NULL,
    createdAt TEXT NOT NULL,
    updatedAt TEXT NOT NULL
)";

pub(crate) const INSERT: &str = "\
INSERT INTO todos_table (id, title, status, createdAt, updatedAt)
VALUES (?, ?, ?, ?, ?)
RETURNING id, title, status, createdAt, updatedAt";

pub(crate) const SELECT_ALL: &str = "\
SELECT id, title, status, createdAt, updatedAt FROM todos_table";

pub(crate) const SELECT_BY_ID: &str = "\
SELECT id, title, status, createdAt, updatedAt FROM todos_table WHERE id = ?";

// Existence check and mutation in one statement: no row back means no match.
pub(crate) const UPDATE_BY_ID: &str = "\
UPDATE todos_table
SET title = COALESCE(?, title), status = COALESCE(?, status), updatedAt = ?
WHERE id = ?
RETURNING id, title, status, createdAt, updatedAt";

pub(crate) const DELETE_BY_ID: &str = "DELETE FROM todos_table WHERE id = ?";

pub(crate) const DELETE_ALL: &str = "DELETE FROM todos_table";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statements_target_the_todo_table() {
        for sql in [
            CREATE_TABLE,
            INSERT,
            SELECT_ALL,
            SELECT_BY_ID,
            UPDATE_BY_ID,
            DELETE_BY_ID,
            DELETE_ALL,
        ] {
            assert!(sql.contains(TABLE_NAME), "{sql}");
        }
    }

    #[test]
    fn create_table_declares_every_column() {
        for column in COLUMNS {
            assert!(CREATE_TABLE.contains(column), "missing {column}");
        }
    }
}
