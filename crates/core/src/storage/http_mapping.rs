//! Pure functions for mapping repository errors to HTTP status codes.
//!
//! This module provides HTTP status code mappings for [`RepositoryError`] variants,
//! following the Functional Core pattern - pure functions with no side effects.

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// Failures of the store itself are reported to the client as a bad request;
/// only a failure to encode data on our side is a server error:
///
/// - `ConnectionFailed` -> 400 (Bad Request)
/// - `QueryFailed` -> 400 (Bad Request)
/// - `ConstraintViolation` -> 400 (Bad Request)
/// - `InvalidData` -> 400 (Bad Request)
/// - `Serialization` -> 500 (Internal Server Error)
///
/// # Examples
///
/// ```
/// use todo_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// let error = RepositoryError::QueryFailed("database is locked".to_string());
/// assert_eq!(repository_error_to_status_code(&error), 400);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::ConnectionFailed(_) => 400,
        RepositoryError::QueryFailed(_) => 400,
        RepositoryError::ConstraintViolation(_) => 400,
        RepositoryError::InvalidData(_) => 400,
        RepositoryError::Serialization(_) => 500,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_failed_maps_to_400() {
        let error = RepositoryError::ConnectionFailed("connection closed".to_string());
        assert_eq!(repository_error_to_status_code(&error), 400);
    }

    #[test]
    fn test_query_failed_maps_to_400() {
        let error = RepositoryError::QueryFailed("invalid query syntax".to_string());
        assert_eq!(repository_error_to_status_code(&error), 400);
    }

    #[test]
    fn test_constraint_violation_maps_to_400() {
        let error = RepositoryError::ConstraintViolation("UNIQUE constraint failed".to_string());
        assert_eq!(repository_error_to_status_code(&error), 400);
    }

    #[test]
    fn test_invalid_data_maps_to_400() {
        let error = RepositoryError::InvalidData("done flag is not 0 or 1".to_string());
        assert_eq!(repository_error_to_status_code(&error), 400);
    }

    #[test]
    fn test_serialization_maps_to_500() {
        let error = RepositoryError::Serialization("failed to serialize JSON".to_string());
        assert_eq!(repository_error_to_status_code(&error), 500);
    }
}
