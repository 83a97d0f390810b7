// src/handlers/questions.rs

use axum::{Json, extract::State, response::IntoResponse};

use crate::{
    error::AppError, models::question::FetchAllQuestionsResponse, repository::Repository,
};

/// Returns the full question bank. The request body is ignored.
pub async fn fetch_all_questions(
    State(repository): State<Repository>,
) -> Result<impl IntoResponse, AppError> {
    let questions = repository.fetch_all_questions().await?;

    Ok(Json(FetchAllQuestionsResponse { questions }))
}
