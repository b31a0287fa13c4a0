//! In-memory storage backend.
//!
//! This module provides an in-memory implementation of [`TodoRepository`]
//! that keeps entries in a `BTreeMap` wrapped in `Arc<RwLock<_>>`. It backs
//! the handler tests and can be selected at startup with `--storage memory`
//! when persistence is not required.
//!
//! [`TodoRepository`]: todo_core::storage::TodoRepository

mod repository;

pub use repository::InMemoryRepository;
