use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::{application::error::ServiceError, domain::value_objects::validation::FieldRule};

/// Wire shape for every failure: `{error, message, details?}`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldRule>>,
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let (status, error, message, details) = match self {
            ServiceError::Validation(violations) => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                "invalid request payload".to_string(),
                Some(violations),
            ),
            ServiceError::NotFound(message) => (StatusCode::NOT_FOUND, "not_found", message, None),
            ServiceError::Conflict(message) => (StatusCode::CONFLICT, "conflict", message, None),
            ServiceError::Internal(err) => {
                // Don't leak internal error detail to the client
                error!(error = ?err, "unhandled internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "internal server error".to_string(),
                    None,
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            message,
            details,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_maps_to_409() {
        let response = ServiceError::Conflict("taken".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn not_found_maps_to_404() {
        let response = ServiceError::NotFound("missing".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_maps_to_400_with_details() {
        let violations = vec![FieldRule::new("cpf", "exactly_11_digits")];
        let response = ServiceError::Validation(violations).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn internal_maps_to_500() {
        let response =
            ServiceError::Internal(anyhow::anyhow!("connection refused")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
