//! Todo CRUD handlers.
//!
//! Every handler answers with the full, refreshed list of todos on success.
//! Request bodies are decoded with [`LenientJson`], so a malformed body is
//! treated as an all-zero payload rather than rejected.

use std::future::Future;

use axum::{extract::State, http::StatusCode, response::IntoResponse};

use todo_core::storage::Result as RepositoryResult;
use todo_core::todo::{
    CreateTodoRequest, DeleteTodoRequest, ErrorEnvelope, TodoEntry, UpdateTodoRequest,
};

use crate::{
    handlers::{error::ListFailed, AppError, JsonResponse, LenientJson},
    state::AppState,
};

type ListResponse = Result<JsonResponse<Vec<TodoEntry>>, AppError>;

/// Reads the full list and wraps it in a 200 response.
///
/// A failed read is a [`ListFailed`] (500), never a 400.
async fn list_response(state: &AppState) -> ListResponse {
    let todos = state.todo_repo.list_todos().await.map_err(ListFailed)?;
    Ok(JsonResponse::ok(todos))
}

/// Runs a mutation and, once it succeeds, responds with the refreshed list.
///
/// A failed mutation halts here and is rendered as an error envelope. The
/// list is read in a separate statement, so a concurrent write from another
/// request may already be visible in it.
async fn mutate_then_list<Fut>(state: &AppState, mutation: Fut) -> ListResponse
where
    Fut: Future<Output = RepositoryResult<()>>,
{
    mutation.await?;
    list_response(state).await
}

/// Create a todo (POST /todo/create).
pub async fn create_todo(
    State(state): State<AppState>,
    LenientJson(payload): LenientJson<CreateTodoRequest>,
) -> ListResponse {
    tracing::debug!(payload = ?payload, "Received create todo request");

    mutate_then_list(&state, async {
        state
            .todo_repo
            .create_todo(&payload.description)
            .await
            .inspect(|_| tracing::info!(description = %payload.description, "Created todo"))
    })
    .await
}

/// Set the completion flag of a todo (PUT /todo/update).
pub async fn update_todo(
    State(state): State<AppState>,
    LenientJson(payload): LenientJson<UpdateTodoRequest>,
) -> ListResponse {
    tracing::debug!(payload = ?payload, "Received update todo request");

    mutate_then_list(&state, async {
        state
            .todo_repo
            .update_todo(payload.id, payload.done)
            .await
            .inspect(|_| tracing::info!(id = payload.id, done = payload.done, "Updated todo"))
    })
    .await
}

/// Delete a todo (DELETE /todo/delete).
pub async fn delete_todo(
    State(state): State<AppState>,
    LenientJson(payload): LenientJson<DeleteTodoRequest>,
) -> ListResponse {
    tracing::debug!(payload = ?payload, "Received delete todo request");

    mutate_then_list(&state, async {
        state
            .todo_repo
            .delete_todo(payload.id)
            .await
            .inspect(|_| tracing::info!(id = payload.id, "Deleted todo"))
    })
    .await
}

/// List every todo (GET /todo/getall).
pub async fn list_todos(State(state): State<AppState>) -> ListResponse {
    tracing::debug!("Listing todos");
    list_response(&state).await
}

/// Fallback for a known path hit with the wrong method.
pub async fn method_not_allowed() -> impl IntoResponse {
    JsonResponse::with_status(
        StatusCode::METHOD_NOT_ALLOWED,
        ErrorEnvelope::new("method not allowed"),
    )
}

/// Fallback for unknown paths.
pub async fn not_found() -> impl IntoResponse {
    JsonResponse::with_status(StatusCode::NOT_FOUND, ErrorEnvelope::new("not found"))
}
