//! Error types for the student records server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Plain-text body returned for unknown identifiers.
pub const NOT_FOUND_BODY: &str = "Not Found";

// == Api Error Enum ==
/// Errors surfaced by the HTTP handlers.
///
/// Store operations themselves never fail; an absent record only becomes an
/// error at the HTTP boundary.
#[derive(Error, Debug)]
pub enum ApiError {
    /// No student matches the requested identifier
    #[error("Student not found: {0}")]
    NotFound(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, NOT_FOUND_BODY).into_response(),
        }
    }
}

// == Result Type Alias ==
/// Convenience Result type for the handlers.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_not_found_is_plain_text_404() {
        let response = ApiError::NotFound("42".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
        assert!(content_type.starts_with("text/plain"));

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], NOT_FOUND_BODY.as_bytes());
    }

    #[test]
    fn test_not_found_message_names_identifier() {
        let err = ApiError::NotFound("abc".to_string());
        assert_eq!(err.to_string(), "Student not found: abc");
    }
}
