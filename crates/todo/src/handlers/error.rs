use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use todo_core::storage::{repository_error_to_status_code, RepositoryError};
use todo_core::todo::ErrorEnvelope;

use super::JsonResponse;

/// Reading the list back failed.
///
/// The requested operation itself did not fail, so this is a server error
/// rather than the 400 a failed write gets.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ListFailed(#[from] pub RepositoryError);

/// Handler error, rendered as `{"Err": "<message>"}`.
///
/// Failed writes carry their repository status code; a failed list read and
/// anything else is a 500.
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = if self.0.is::<ListFailed>() {
            StatusCode::INTERNAL_SERVER_ERROR
        } else if let Some(repo_error) = self.0.downcast_ref::<RepositoryError>() {
            let code = repository_error_to_status_code(repo_error);
            StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        tracing::warn!(status = %status_code, error = %self.0, "API error");

        JsonResponse::with_status(status_code, ErrorEnvelope::new(self.0.to_string()))
            .into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_repository_error_is_bad_request() {
        let error = AppError::from(RepositoryError::QueryFailed("database is locked".to_string()));

        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"Err": "Query failed: database is locked"})
        );
    }

    #[tokio::test]
    async fn test_serialization_error_is_internal() {
        let error = AppError::from(RepositoryError::Serialization("bad row".to_string()));

        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_list_failure_is_internal() {
        let error = AppError::from(ListFailed(RepositoryError::QueryFailed(
            "no such table: todos".to_string(),
        )));

        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"Err": "Query failed: no such table: todos"})
        );
    }

    #[tokio::test]
    async fn test_other_error_is_internal() {
        let error = AppError(anyhow::anyhow!("unexpected"));

        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await, serde_json::json!({"Err": "unexpected"}));
    }
}
