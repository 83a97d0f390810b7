// src/models/session.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{question::Question, score::SubmittedScore};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "No user id found"))]
    pub user_id: String,
}

/// Everything the client needs on login: the user's score history and the
/// full question bank.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub scores: Vec<SubmittedScore>,
    pub questions: Vec<Question>,
}
