use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use crate::api::models::{SubmitRequest, SubmitResponse, SUBMIT_SUCCESS_MESSAGE};
use crate::api::AppState;
use crate::errors::QuizError;

pub async fn submit(
    State(state): State<AppState>,
    payload: Result<Json<SubmitRequest>, JsonRejection>,
) -> Result<Json<SubmitResponse>, QuizError> {
    let Json(req) = payload.map_err(|e| QuizError::InvalidPayload(e.body_text()))?;

    let record = state.store.record(req.responses, &state.report)?;

    Ok(Json(SubmitResponse {
        message: SUBMIT_SUCCESS_MESSAGE.to_string(),
        data: record.responses,
    }))
}
