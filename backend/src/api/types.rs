//! HTTP response types.
//!
//! Matrix endpoints answer in plain text; errors become `400 Bad Request`
//! with the error message as body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::ServerError;
use crate::matrix::Operation;

/// Body of `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    /// `"POST /echo"` style route list
    pub endpoints: Vec<String>,
}

impl HealthResponse {
    pub fn ok() -> Self {
        let mut endpoints: Vec<String> = Operation::ALL
            .iter()
            .map(|op| format!("POST {}", op.path()))
            .collect();
        endpoints.push("GET /api/logs (SSE)".to_string());

        Self {
            status: "ok".to_string(),
            service: "matrixops".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            endpoints,
        }
    }
}

impl ServerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::MissingFile | ServerError::Multipart(_) | ServerError::Pipeline(_) => {
                StatusCode::BAD_REQUEST
            }
            ServerError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{MatrixError, PipelineError};

    #[test]
    fn test_health_lists_every_operation() {
        let health = HealthResponse::ok();
        assert_eq!(health.status, "ok");
        assert_eq!(health.endpoints.len(), Operation::ALL.len() + 1);
        assert!(health.endpoints.contains(&"POST /invert".to_string()));
    }

    #[test]
    fn test_client_errors_are_bad_request() {
        let err = ServerError::Pipeline(PipelineError::Matrix(MatrixError::NotSquare));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ServerError::MissingFile.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_error_response_status() {
        let response = ServerError::MissingFile.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
