use axum::{http::StatusCode, response::IntoResponse, Json};
use crate::errors::QuizError;
use super::models::ErrorResponse;

impl QuizError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            QuizError::EmptySubmission | QuizError::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            QuizError::NoResponses => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for QuizError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }
        (status, Json(ErrorResponse { error: self.to_string() })).into_response()
    }
}
