// src/handlers/session.rs

use axum::{Json, extract::State, extract::rejection::JsonRejection, response::IntoResponse};
use validator::Validate;

use crate::{
    error::AppError,
    models::session::{LoginRequest, LoginResponse},
    repository::Repository,
};

/// Logs a user in and returns their score history together with the full
/// question bank.
///
/// There is no authentication: any caller presenting a user ID acts as that
/// user. The two repository reads run sequentially and fail fast; a failed
/// score fetch discards the already-fetched questions.
pub async fn login(
    State(repository): State<Repository>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(request) = payload?;
    if let Err(validation_errors) = request.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let questions = repository.fetch_all_questions().await?;
    let scores = repository.fetch_scores(&request.user_id).await?;

    Ok(Json(LoginResponse { scores, questions }))
}
