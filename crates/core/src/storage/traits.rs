use async_trait::async_trait;

use crate::todo::TodoEntry;

use super::Result;

/// Repository for todo entries.
///
/// Every method is a single atomic statement against the backing store; no
/// transaction spans two calls.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Ensures the backing table exists. Safe to call repeatedly.
    async fn try_create_schema(&self) -> Result<()>;

    /// Inserts a new entry with a store-assigned id and `done = false`.
    async fn create_todo(&self, description: &str) -> Result<()>;

    /// Returns every stored entry in ascending id order.
    async fn list_todos(&self) -> Result<Vec<TodoEntry>>;

    /// Sets the completion flag of the entry with the given id.
    ///
    /// Succeeds without effect when no entry matches.
    async fn update_todo(&self, id: i64, done: bool) -> Result<()>;

    /// Removes the entry with the given id.
    ///
    /// Succeeds without effect when no entry matches.
    async fn delete_todo(&self, id: i64) -> Result<()>;
}
