//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. Storage sits behind a [`TodoRepository`] trait object so
//! the backend can be chosen at startup.

use std::sync::Arc;

use anyhow::Context;
use todo_core::storage::TodoRepository;

use crate::config::{Config, StorageBackend};
use crate::storage::{InMemoryRepository, SqliteRepository};

/// Shared state handed to every request.
///
/// The repository handle is shared by all concurrent requests without any
/// application-level locking; the store serializes conflicting writes.
#[derive(Clone)]
pub struct AppState {
    pub todo_repo: Arc<dyn TodoRepository>,
}

impl AppState {
    /// Opens the configured backend and makes sure its schema exists.
    ///
    /// Any failure here is fatal for the process.
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        let todo_repo: Arc<dyn TodoRepository> = match config.storage {
            StorageBackend::Sqlite => {
                tracing::info!(path = %config.db_path, "Using SQLite database");
                let repo = SqliteRepository::open(&config.db_path)
                    .await
                    .with_context(|| format!("failed to open database '{}'", config.db_path))?;
                Arc::new(repo)
            }
            StorageBackend::Memory => {
                tracing::warn!("Using in-memory storage, data will not survive a restart");
                Arc::new(InMemoryRepository::new())
            }
        };

        todo_repo
            .try_create_schema()
            .await
            .context("failed to create todo schema")?;

        Ok(Self::with_repository(todo_repo))
    }

    /// Wraps an already initialized repository.
    pub fn with_repository(todo_repo: Arc<dyn TodoRepository>) -> Self {
        Self { todo_repo }
    }
}

#[cfg(test)]
impl Default for AppState {
    /// Creates an AppState with in-memory storage for testing.
    fn default() -> Self {
        Self::with_repository(Arc::new(InMemoryRepository::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_new_with_memory_backend() {
        let config = Config {
            storage: StorageBackend::Memory,
            ..Config::default()
        };

        let state = AppState::new(&config).await.unwrap();

        assert!(state.todo_repo.list_todos().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_new_with_sqlite_memory_path() {
        let config = Config {
            db_path: ":memory:".to_string(),
            ..Config::default()
        };

        let state = AppState::new(&config).await.unwrap();
        state.todo_repo.create_todo("persisted").await.unwrap();

        assert_eq!(state.todo_repo.list_todos().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_new_fails_for_unopenable_path() {
        let config = Config {
            db_path: "/nonexistent-dir/for/todo/tests/todo.db".to_string(),
            ..Config::default()
        };

        assert!(AppState::new(&config).await.is_err());
    }
}
