use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use leadlight_common::error::LeadError;

pub struct ApiError(pub LeadError);

impl From<LeadError> for ApiError {
    fn from(err: LeadError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            LeadError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            other => (StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
        };

        let body = serde_json::json!({ "error": message });
        (status, Json(body)).into_response()
    }
}
