//! HTTP error response mapping.

use std::num::ParseIntError;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use bookshelf_domain::error::BookshelfError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Failure of an API handler, mapped to an HTTP response with the matching
/// status code.
pub enum ApiError {
    /// Error raised by the application service.
    Domain(BookshelfError),
    /// The request body is not a valid book payload.
    MalformedBody(JsonRejection),
    /// The `{id}` path segment is not a book identifier.
    InvalidId(ParseIntError),
}

impl From<BookshelfError> for ApiError {
    fn from(err: BookshelfError) -> Self {
        Self::Domain(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedBody(rejection)
    }
}

impl From<ParseIntError> for ApiError {
    fn from(err: ParseIntError) -> Self {
        Self::InvalidId(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            // Absent books are reported by status alone.
            Self::Domain(BookshelfError::NotFound(err)) => {
                tracing::debug!(error = %err, "not found");
                return StatusCode::NOT_FOUND.into_response();
            }
            Self::Domain(BookshelfError::Storage(err)) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            Self::MalformedBody(rejection) => (StatusCode::BAD_REQUEST, rejection.body_text()),
            Self::InvalidId(err) => (StatusCode::BAD_REQUEST, format!("invalid book id: {err}")),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookshelf_domain::error::NotFoundError;
    use http_body_util::BodyExt;

    async fn body_bytes(response: Response) -> Vec<u8> {
        response
            .into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec()
    }

    #[tokio::test]
    async fn should_map_not_found_to_404_with_empty_body() {
        let err = ApiError::from(BookshelfError::from(NotFoundError {
            entity: "Book",
            id: "9".to_string(),
        }));

        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_bytes(response).await.is_empty());
    }

    #[tokio::test]
    async fn should_map_storage_error_to_500_without_leaking_details() {
        let err = ApiError::from(BookshelfError::Storage(Box::new(std::io::Error::other(
            "secret detail",
        ))));

        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(body["error"], "internal server error");
    }

    #[tokio::test]
    async fn should_map_invalid_id_to_400() {
        let err = ApiError::from("abc".parse::<u64>().unwrap_err());

        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert!(body["error"].as_str().unwrap().starts_with("invalid book id"));
    }
}
