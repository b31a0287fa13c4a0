mod requests;
mod types;

pub use requests::{CreateTodoRequest, DeleteTodoRequest, UpdateTodoRequest};
pub use types::{ErrorEnvelope, TodoEntry};
