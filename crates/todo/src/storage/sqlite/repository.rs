//! SQLite repository implementation.
//!
//! Implements [`TodoRepository`] from `todo_core::storage` using SQLite.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use todo_core::storage::{RepositoryError, Result, TodoRepository};
use todo_core::todo::TodoEntry;

use super::conversions::{bool_to_int, row_to_todo};
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based repository implementation.
///
/// The connection lives on a dedicated background thread; statements from
/// concurrent requests are queued onto it and run one at a time.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Opens a file-based database.
    ///
    /// The database file will be created if it doesn't exist. The schema is
    /// not touched; call [`TodoRepository::try_create_schema`] once at startup.
    pub async fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Ok(Self { conn })
    }

    /// Opens an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Ok(Self { conn })
    }
}

#[async_trait]
impl TodoRepository for SqliteRepository {
    async fn try_create_schema(&self) -> Result<()> {
        self.conn
            .call(|conn| {
                conn.execute_batch(schema::CREATE_TABLES).map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn create_todo(&self, description: &str) -> Result<()> {
        let description = description.to_string();

        self.conn
            .call(move |conn| {
                conn.execute(schema::INSERT_TODO, rusqlite::params![description])
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn list_todos(&self) -> Result<Vec<TodoEntry>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_ALL_TODOS).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_todo).map_err(wrap_err)?;

                let mut todos = Vec::new();
                for row_result in rows {
                    todos.push(row_result.map_err(wrap_err)?);
                }
                Ok(todos)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn update_todo(&self, id: i64, done: bool) -> Result<()> {
        let done = bool_to_int(done);

        // Zero affected rows is not an error: updating a missing id is a no-op.
        self.conn
            .call(move |conn| {
                conn.execute(schema::UPDATE_TODO_DONE, rusqlite::params![id, done])
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn delete_todo(&self, id: i64) -> Result<()> {
        self.conn
            .call(move |conn| {
                conn.execute(schema::DELETE_TODO, rusqlite::params![id])
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn repo() -> SqliteRepository {
        let repo = SqliteRepository::open_in_memory().await.unwrap();
        repo.try_create_schema().await.unwrap();
        repo
    }

    #[tokio::test]
    async fn test_schema_creation_is_idempotent() {
        let repo = repo().await;
        repo.try_create_schema().await.unwrap();
        repo.try_create_schema().await.unwrap();

        assert!(repo.list_todos().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_without_schema_fails() {
        let repo = SqliteRepository::open_in_memory().await.unwrap();

        let result = repo.list_todos().await;

        assert!(matches!(result, Err(RepositoryError::QueryFailed(_))));
    }

    #[tokio::test]
    async fn test_create_assigns_ids_and_defaults_done() {
        let repo = repo().await;

        repo.create_todo("buy milk").await.unwrap();
        repo.create_todo("walk dog").await.unwrap();

        let todos = repo.list_todos().await.unwrap();
        assert_eq!(
            todos,
            vec![TodoEntry::new(1, "buy milk"), TodoEntry::new(2, "walk dog")]
        );
    }

    #[tokio::test]
    async fn test_create_allows_empty_description() {
        let repo = repo().await;

        repo.create_todo("").await.unwrap();

        let todos = repo.list_todos().await.unwrap();
        assert_eq!(todos, vec![TodoEntry::new(1, "")]);
    }

    #[tokio::test]
    async fn test_update_changes_only_target() {
        let repo = repo().await;
        repo.create_todo("first").await.unwrap();
        repo.create_todo("second").await.unwrap();

        repo.update_todo(2, true).await.unwrap();

        let todos = repo.list_todos().await.unwrap();
        assert_eq!(
            todos,
            vec![
                TodoEntry::new(1, "first"),
                TodoEntry::new(2, "second").with_done(true),
            ]
        );

        repo.update_todo(2, false).await.unwrap();
        assert!(!repo.list_todos().await.unwrap()[1].done);
    }

    #[tokio::test]
    async fn test_update_nonexistent_is_noop() {
        let repo = repo().await;
        repo.create_todo("only").await.unwrap();

        repo.update_todo(999, true).await.unwrap();

        assert_eq!(repo.list_todos().await.unwrap(), vec![TodoEntry::new(1, "only")]);
    }

    #[tokio::test]
    async fn test_delete_removes_entry() {
        let repo = repo().await;
        repo.create_todo("first").await.unwrap();
        repo.create_todo("second").await.unwrap();

        repo.delete_todo(1).await.unwrap();

        assert_eq!(
            repo.list_todos().await.unwrap(),
            vec![TodoEntry::new(2, "second")]
        );
    }

    #[tokio::test]
    async fn test_delete_nonexistent_is_noop() {
        let repo = repo().await;
        repo.create_todo("keep me").await.unwrap();

        repo.delete_todo(42).await.unwrap();

        assert_eq!(repo.list_todos().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = repo().await;
        repo.create_todo("first").await.unwrap();
        repo.delete_todo(1).await.unwrap();

        repo.create_todo("second").await.unwrap();

        assert_eq!(
            repo.list_todos().await.unwrap(),
            vec![TodoEntry::new(2, "second")]
        );
    }
}
