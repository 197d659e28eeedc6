//! Error types for the HTTP API

use crate::api::FailureResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use binlookup_core::LookupError;
use std::fmt;

/// Message returned when the BIN path parameter is missing or too short
pub const INVALID_BIN_MESSAGE: &str = "Please provide at least 6 digits of the BIN number";

/// Message returned when no record matches
pub const BIN_NOT_FOUND_MESSAGE: &str = "BIN not found";

/// API error type
#[derive(Debug)]
pub enum ApiError {
    /// Bad request (400)
    BadRequest(String),

    /// Not found (404)
    NotFound(String),

    /// Internal server error (500)
    Internal(String),
}

/// API result type
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<LookupError> for ApiError {
    fn from(err: LookupError) -> Self {
        match err {
            LookupError::InvalidInput { .. } => ApiError::BadRequest(INVALID_BIN_MESSAGE.to_string()),
            LookupError::NotFound => ApiError::NotFound(BIN_NOT_FOUND_MESSAGE.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::BadRequest(msg) | ApiError::NotFound(msg) | ApiError::Internal(msg) => msg,
        };

        (status, Json(FailureResponse::new(message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use binlookup_core::MIN_PREFIX_LEN;

    async fn body_json(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[test]
    fn test_api_error_display() {
        let err = ApiError::BadRequest("Invalid input".to_string());
        assert_eq!(format!("{}", err), "Bad request: Invalid input");

        let err = ApiError::NotFound("BIN not found".to_string());
        assert_eq!(format!("{}", err), "Not found: BIN not found");

        let err = ApiError::Internal("Recorder missing".to_string());
        assert_eq!(format!("{}", err), "Internal error: Recorder missing");
    }

    #[test]
    fn test_invalid_message_matches_min_prefix_len() {
        assert!(INVALID_BIN_MESSAGE.contains(&MIN_PREFIX_LEN.to_string()));
    }

    #[test]
    fn test_api_error_from_lookup_error() {
        let err: ApiError = LookupError::InvalidInput {
            min_len: 6,
            actual: 2,
        }
        .into();
        assert!(matches!(err, ApiError::BadRequest(ref m) if m == INVALID_BIN_MESSAGE));

        let err: ApiError = LookupError::NotFound.into();
        assert!(matches!(err, ApiError::NotFound(ref m) if m == BIN_NOT_FOUND_MESSAGE));
    }

    #[tokio::test]
    async fn test_api_error_into_response_bad_request() {
        let (status, json) = body_json(ApiError::BadRequest(INVALID_BIN_MESSAGE.to_string())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], INVALID_BIN_MESSAGE);
    }

    #[tokio::test]
    async fn test_api_error_into_response_not_found() {
        let (status, json) = body_json(LookupError::NotFound.into()).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            json,
            serde_json::json!({"success": false, "message": "BIN not found"})
        );
    }

    #[tokio::test]
    async fn test_api_error_into_response_internal() {
        let (status, json) = body_json(ApiError::Internal("boom".to_string())).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "boom");
    }
}
