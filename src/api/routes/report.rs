use axum::{
    extract::State,
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
};
use crate::api::AppState;
use crate::errors::QuizError;
use crate::reporting::generate_report;

/// PDF report of the most recent submission, as a download.
pub async fn get_report(State(state): State<AppState>) -> Result<Response, QuizError> {
    let bytes = generate_report(&state.store, &state.questions_path, &state.report).await?;

    let disposition = HeaderValue::from_str(&format!(
        "attachment; filename=\"{}\"",
        state.report.filename
    ))
    .map_err(|e| QuizError::Internal(format!("Invalid report filename: {}", e)))?;

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("application/pdf")),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response())
}
