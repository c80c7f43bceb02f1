//! # error
//!
//! Centralised application error type.
//!
//! The four API routes succeed on every reachable input (an unknown ticker is
//! answered, not rejected), so this only surfaces from the router fallback.
//! Axum's `IntoResponse` impl renders it as a JSON body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// No route matches the request path.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        tracing::debug!(%status, error = %message, "Request rejected");

        let body = Json(json!({
            "ok":    false,
            "error": message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_not_found_maps_to_404_json() {
        let response = AppError::NotFound("no route for /nope".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), 10_000).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["ok"], false);
        assert_eq!(json["error"], "no route for /nope");
    }

    #[test]
    fn test_display() {
        let err = AppError::NotFound("no route for /x".into());
        assert_eq!(err.to_string(), "Not found: no route for /x");
    }
}
