// src/models/question.rs

use serde::{Deserialize, Serialize};

/// A question from the bank, with the choices stored under it.
///
/// Questions are authored out-of-band and read-only through this API; the
/// choice set carries no meaningful order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub choices: Vec<Choice>,
}

/// An answer choice, owned by exactly one question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Choice {
    pub id: String,
    pub text: String,
}

/// A test entry as returned to a test taker: the question, its choices, and
/// the choice the creator marked correct.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionWithCorrectChoice {
    pub text: String,
    pub choices: Vec<Choice>,
    pub correct_choice_id: String,
}

#[derive(Debug, Serialize)]
pub struct FetchAllQuestionsResponse {
    pub questions: Vec<Question>,
}
