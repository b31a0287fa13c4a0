//! Core domain types and storage contracts for the todo API.
//!
//! This crate holds no I/O: it defines the [`todo::TodoEntry`] entity, the
//! request payloads decoded by the HTTP layer, and the
//! [`storage::TodoRepository`] trait implemented by the storage backends.

pub mod serde;
pub mod storage;
pub mod todo;
