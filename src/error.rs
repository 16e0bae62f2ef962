use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Errors that can occur while delegating extraction to the scraper service
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The outbound call could not be completed: connection refused, DNS
    /// failure, timeout, or a broken body stream
    #[error("Failed to reach the scraper service: {0}")]
    Transport(#[from] reqwest::Error),

    /// The scraper service answered, but the body was not a recipe: invalid
    /// JSON, or a payload that does not match the expected shape
    #[error("Failed to decode the scraper response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Every failed request maps to the same response: the client learns that
/// the request failed and nothing else. The transport/decode distinction
/// stays in the logs.
impl IntoResponse for ExtractError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "message": "error" })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_error() -> ExtractError {
        serde_json::from_str::<crate::model::Recipe>("not json")
            .unwrap_err()
            .into()
    }

    #[test]
    fn test_decode_error_message_names_the_cause() {
        let err = decode_error();
        assert!(err.to_string().starts_with("Failed to decode"));
    }

    #[tokio::test]
    async fn test_error_response_is_generic_500() {
        let response = decode_error().into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body, json!({ "message": "error" }));
    }
}
