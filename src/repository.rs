// src/repository.rs

use std::sync::Arc;

use serde::Deserialize;

use crate::models::{
    question::{Choice, Question, QuestionWithCorrectChoice},
    score::SubmittedScore,
    test::Test,
};
use crate::store::{DocumentStore, StoreError, to_fields};

/// Stored shape of a question document; the ID lives in the document key and
/// the choices in a sub-collection.
#[derive(Deserialize)]
struct QuestionRecord {
    text: String,
}

/// Stored shape of a choice document.
#[derive(Deserialize)]
struct ChoiceRecord {
    text: String,
}

/// Maps the domain entities onto the store's collection hierarchy:
///
/// - `users/{userId}/scores/*` — one document per submitted score
/// - `tests/{testId}` — one document per test
/// - `questions/{questionId}` — one document per question (text only)
/// - `questions/{questionId}/choices/*` — one document per choice
///
/// Every read re-traverses the store; nothing is cached. All operations are
/// fail-fast: a failing step aborts the whole call with no partial results.
#[derive(Clone)]
pub struct Repository {
    store: Arc<dyn DocumentStore>,
}

impl Repository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Appends a score under the user's scores collection with a
    /// store-generated key. No uniqueness check, no count limit.
    pub async fn submit_score(
        &self,
        user_id: &str,
        score: &SubmittedScore,
    ) -> Result<(), StoreError> {
        let fields = to_fields(score)?;
        self.store
            .add(&format!("users/{}/scores", user_id), fields)
            .await?;
        Ok(())
    }

    /// Fetches every score the user has submitted, in store-native order.
    /// A user with no scores (or no namespace at all) yields an empty list.
    pub async fn fetch_scores(&self, user_id: &str) -> Result<Vec<SubmittedScore>, StoreError> {
        let docs = self
            .store
            .list(&format!("users/{}/scores", user_id))
            .await?;
        docs.iter().map(|doc| doc.decode()).collect()
    }

    /// Writes the test at the given ID, overwriting any prior document there.
    pub async fn create_test(&self, test_id: &str, test: &Test) -> Result<(), StoreError> {
        let fields = to_fields(test)?;
        self.store.set(&format!("tests/{}", test_id), fields).await
    }

    /// Single-document read of a test. An absent test surfaces the store's
    /// not-found error.
    pub async fn fetch_test(&self, test_id: &str) -> Result<Test, StoreError> {
        let doc = self.store.get(&format!("tests/{}", test_id)).await?;
        doc.decode()
    }

    /// Fetches the whole question bank: one listing of the questions
    /// collection plus one nested listing of each question's choices.
    pub async fn fetch_all_questions(&self) -> Result<Vec<Question>, StoreError> {
        let mut questions = Vec::new();

        for doc in self.store.list("questions").await? {
            let record: QuestionRecord = doc.decode()?;
            let choices = self.fetch_choices(&doc.id).await?;
            questions.push(Question {
                id: doc.id,
                text: record.text,
                choices,
            });
        }

        Ok(questions)
    }

    /// Resolves each of the test's question references and zips in the
    /// creator's selected choice. A dangling reference fails the whole call.
    pub async fn fetch_questions(
        &self,
        test: &Test,
    ) -> Result<Vec<QuestionWithCorrectChoice>, StoreError> {
        let mut questions = Vec::new();

        for submitted in &test.submitted_questions {
            let doc = self
                .store
                .get(&format!("questions/{}", submitted.question_id))
                .await?;
            let record: QuestionRecord = doc.decode()?;
            let choices = self.fetch_choices(&submitted.question_id).await?;
            questions.push(QuestionWithCorrectChoice {
                text: record.text,
                choices,
                correct_choice_id: submitted.selected_choice_id.clone(),
            });
        }

        Ok(questions)
    }

    async fn fetch_choices(&self, question_id: &str) -> Result<Vec<Choice>, StoreError> {
        let docs = self
            .store
            .list(&format!("questions/{}/choices", question_id))
            .await?;
        docs.into_iter()
            .map(|doc| {
                let record: ChoiceRecord = doc.decode()?;
                Ok(Choice {
                    id: doc.id,
                    text: record.text,
                })
            })
            .collect()
    }
}
