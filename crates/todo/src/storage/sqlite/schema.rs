//! SQLite schema definitions and SQL query constants.
//!
//! This module contains all SQL statements used by the SQLite repository,
//! following the Functional Core pattern - pure data, no I/O.

/// SQL statement to create the todos table.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS todos (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    description TEXT NOT NULL,
    done INTEGER NOT NULL DEFAULT 0
);
"#;

pub const INSERT_TODO: &str = r#"
INSERT INTO todos (description, done)
VALUES (?1, 0)
"#;

pub const SELECT_ALL_TODOS: &str = r#"
SELECT id, description, done
FROM todos
ORDER BY id ASC
"#;

pub const UPDATE_TODO_DONE: &str = r#"
UPDATE todos
SET done = ?2
WHERE id = ?1
"#;

pub const DELETE_TODO: &str = r#"
DELETE FROM todos
WHERE id = ?1
"#;
