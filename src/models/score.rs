// src/models/score.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

/// DTO for submitting a score. The timestamp is assigned server-side; a
/// client-supplied one is never accepted.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitScoreRequest {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub value: i64,

    #[serde(default)]
    #[validate(length(min = 1, message = "No user id found"))]
    pub user_id: String,
}

/// A stored score: named numeric value plus the server-assigned submission
/// time in seconds since epoch. Append-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmittedScore {
    pub name: String,
    pub value: i64,
    pub timestamp: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchScoresRequest {
    #[serde(default)]
    pub user_id: String,
}

#[derive(Debug, Serialize)]
pub struct FetchScoresResponse {
    pub scores: Vec<SubmittedScore>,
}

#[derive(Debug, Serialize)]
pub struct SubmitScoreResponse {
    pub success: bool,
}
