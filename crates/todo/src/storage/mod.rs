//! Storage backend implementations.
//!
//! This module provides concrete implementations of [`TodoRepository`]
//! defined in `todo_core::storage`. The backend is chosen at startup with
//! `--storage` (see [`StorageBackend`]).
//!
//! [`TodoRepository`]: todo_core::storage::TodoRepository
//! [`StorageBackend`]: crate::config::StorageBackend

pub mod inmemory;
pub mod sqlite;

pub use inmemory::InMemoryRepository;
pub use sqlite::SqliteRepository;
