//! Error types and HTTP response conversion
//!
//! The message strings in the `#[error]` attributes are part of the API
//! contract with consumers and must stay stable. Two asymmetries are kept on
//! purpose because existing clients depend on them: a malformed path id is
//! 422 on update but 400 on delete, and a storage failure during delete is
//! reported as 400 where the other write paths use 500.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ids::PersonIdError;
use crate::repository::RepositoryError;
use crate::validation::ValidationError;

/// Result type alias using the service error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the service
#[derive(Debug, Error)]
pub enum Error {
    /// Request body was not decodable JSON for the expected shape (422).
    #[error("broken body")]
    MalformedBody,

    /// Body decoded but a required field was missing or invalid (400).
    #[error("broken body")]
    InvalidBody(#[source] ValidationError),

    /// Path id not decodable on the update path (422).
    #[error("broken id")]
    MalformedId(#[source] PersonIdError),

    /// Path id not decodable on the delete path (400).
    #[error("broken id")]
    InvalidId(#[source] PersonIdError),

    /// Lookup, update, or delete matched zero documents (404).
    #[error("person not found")]
    PersonNotFound,

    /// Storage failure while inserting (500).
    #[error("error to create a person")]
    CreateFailed(#[source] RepositoryError),

    /// Storage failure while updating (500).
    #[error("error to update a person")]
    UpdateFailed(#[source] RepositoryError),

    /// Storage failure while deleting (400, kept for compatibility).
    #[error("error to delete a person")]
    DeleteFailed(#[source] RepositoryError),

    /// Read-path storage failure or internal shape mismatch (500). The
    /// detail is logged, never exposed.
    #[error("an internal error occurred")]
    Internal(String),

    /// Configuration error (startup only)
    #[error("configuration error: {0}")]
    Config(Box<figment::Error>),

    /// Database client error (startup only)
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Stable, client-facing error message
    pub message: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Error::MalformedBody | Error::MalformedId(_) => StatusCode::UNPROCESSABLE_ENTITY,

            Error::InvalidBody(_) | Error::InvalidId(_) | Error::DeleteFailed(_) => {
                StatusCode::BAD_REQUEST
            }

            Error::PersonNotFound => StatusCode::NOT_FOUND,

            Error::Internal(detail) => {
                tracing::error!("internal error: {detail}");
                StatusCode::INTERNAL_SERVER_ERROR
            }

            Error::CreateFailed(_)
            | Error::UpdateFailed(_)
            | Error::Config(_)
            | Error::Database(_)
            | Error::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = ErrorBody {
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

// Boxed to keep the enum small
impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Error::Config(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{RepositoryErrorKind, RepositoryOperation};

    fn storage_error() -> RepositoryError {
        RepositoryError::new(
            RepositoryOperation::Create,
            RepositoryErrorKind::ConnectionFailed,
            "connection refused",
        )
    }

    fn validation_error() -> ValidationError {
        ValidationError {
            field: "email",
            reason: "is not a valid address",
        }
    }

    fn id_error() -> PersonIdError {
        "nope".parse::<crate::ids::PersonId>().unwrap_err()
    }

    async fn body_message(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: ErrorBody = serde_json::from_slice(&bytes).unwrap();
        body.message
    }

    #[tokio::test]
    async fn test_malformed_body_is_422_broken_body() {
        let response = Error::MalformedBody.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body_message(response).await, "broken body");
    }

    #[tokio::test]
    async fn test_invalid_body_is_400_broken_body() {
        let response = Error::InvalidBody(validation_error()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_message(response).await, "broken body");
    }

    #[tokio::test]
    async fn test_id_asymmetry_between_update_and_delete() {
        let update = Error::MalformedId(id_error()).into_response();
        assert_eq!(update.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body_message(update).await, "broken id");

        let delete = Error::InvalidId(id_error()).into_response();
        assert_eq!(delete.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_message(delete).await, "broken id");
    }

    #[tokio::test]
    async fn test_not_found_is_404() {
        let response = Error::PersonNotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_message(response).await, "person not found");
    }

    #[tokio::test]
    async fn test_write_failures() {
        let create = Error::CreateFailed(storage_error()).into_response();
        assert_eq!(create.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let update = Error::UpdateFailed(storage_error()).into_response();
        assert_eq!(update.status(), StatusCode::INTERNAL_SERVER_ERROR);

        // Delete reports storage failures as 400, kept for compatibility.
        let delete = Error::DeleteFailed(storage_error()).into_response();
        assert_eq!(delete.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_message(delete).await, "error to delete a person");
    }

    #[tokio::test]
    async fn test_internal_hides_detail() {
        let response = Error::Internal("cursor decode failed".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_message(response).await, "an internal error occurred");
    }

    #[tokio::test]
    async fn test_responses_are_json() {
        let response = Error::PersonNotFound.into_response();
        let content_type = response
            .headers()
            .get(axum::http::header::CONTENT_TYPE)
            .unwrap();
        assert_eq!(content_type, "application/json");
    }
}
