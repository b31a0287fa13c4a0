//! SQLite storage backend implementation.
//!
//! This module provides a SQLite-based implementation of [`TodoRepository`]
//! using `rusqlite` for synchronous operations and `tokio-rusqlite` for async wrapping.
//!
//! [`TodoRepository`]: todo_core::storage::TodoRepository

mod conversions;
mod error;
mod repository;
mod schema;

pub use repository::SqliteRepository;
