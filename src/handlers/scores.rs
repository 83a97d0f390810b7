// src/handlers/scores.rs

use axum::{Json, extract::State, extract::rejection::JsonRejection, response::IntoResponse};
use chrono::Utc;
use validator::Validate;

use crate::{
    error::AppError,
    models::score::{
        FetchScoresRequest, FetchScoresResponse, SubmitScoreRequest, SubmitScoreResponse,
        SubmittedScore,
    },
    repository::Repository,
};

/// Appends a named score for the user. The timestamp is stamped here, at the
/// moment the request is processed.
pub async fn submit_score(
    State(repository): State<Repository>,
    payload: Result<Json<SubmitScoreRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(request) = payload?;
    if let Err(validation_errors) = request.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let score = SubmittedScore {
        name: request.name,
        value: request.value,
        timestamp: Utc::now().timestamp(),
    };
    repository.submit_score(&request.user_id, &score).await?;

    Ok(Json(SubmitScoreResponse { success: true }))
}

/// Returns every score the user has submitted. No field-presence check
/// beyond decoding: an unknown (or empty) user ID yields an empty list.
pub async fn fetch_scores(
    State(repository): State<Repository>,
    payload: Result<Json<FetchScoresRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(request) = payload?;

    let scores = repository.fetch_scores(&request.user_id).await?;

    Ok(Json(FetchScoresResponse { scores }))
}
