//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use todo_core::storage::{Result, TodoRepository};
use todo_core::todo::TodoEntry;

#[derive(Debug, Default)]
struct Table {
    /// Last id handed out. Ids are never reused, mirroring SQLite AUTOINCREMENT.
    last_id: i64,
    rows: BTreeMap<i64, TodoEntry>,
}

/// In-memory storage backend.
///
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    table: Arc<RwLock<Table>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoRepository for InMemoryRepository {
    async fn try_create_schema(&self) -> Result<()> {
        Ok(())
    }

    async fn create_todo(&self, description: &str) -> Result<()> {
        let mut table = self.table.write().await;
        table.last_id += 1;
        let id = table.last_id;
        table.rows.insert(id, TodoEntry::new(id, description));
        Ok(())
    }

    async fn list_todos(&self) -> Result<Vec<TodoEntry>> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn update_todo(&self, id: i64, done: bool) -> Result<()> {
        let mut table = self.table.write().await;
        if let Some(entry) = table.rows.get_mut(&id) {
            entry.done = done;
        }
        Ok(())
    }

    async fn delete_todo(&self, id: i64) -> Result<()> {
        let mut table = self.table.write().await;
        table.rows.remove(&id);
        Ok(())
    }
}
