use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use pitchside_models::PitchsideError;

/// Error shape every handler returns: a status code plus a message rendered
/// as the `{"error": ...}` body the dashboard client expects.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }
}

impl From<PitchsideError> for ApiError {
    fn from(err: PitchsideError) -> Self {
        let status = match &err {
            PitchsideError::NotFound { .. } => StatusCode::NOT_FOUND,
            PitchsideError::Validation { .. } => StatusCode::BAD_REQUEST,
            PitchsideError::Internal(_) => {
                tracing::error!(error = %err, "request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_mapping() {
        let not_found: ApiError = PitchsideError::not_found("match", 7).into();
        assert_eq!(not_found.status, StatusCode::NOT_FOUND);
        assert_eq!(not_found.message, "match not found: 7");

        let validation: ApiError =
            PitchsideError::validation("matchId", "is required").into();
        assert_eq!(validation.status, StatusCode::BAD_REQUEST);

        let internal: ApiError = PitchsideError::Internal("boom".to_string()).into();
        assert_eq!(internal.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
