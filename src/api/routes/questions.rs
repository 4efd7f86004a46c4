use axum::{extract::State, Json};
use crate::api::AppState;
use crate::errors::QuizError;
use crate::models::Question;
use crate::questions::load_questions;

/// The question bank flattened into one list, re-read on every request.
pub async fn get_questions(
    State(state): State<AppState>,
) -> Result<Json<Vec<Question>>, QuizError> {
    let questions = load_questions(&state.questions_path).await?;
    Ok(Json(questions))
}
