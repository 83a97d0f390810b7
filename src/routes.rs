// src/routes.rs

use axum::{Router, http::Method, http::header, routing::post};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{questions, scores, session, tests},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Registers the six POST operations under their wire-stable paths
///   (`/FetchQuestions` serves FetchAllQuestions).
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (repository, ID generator, config).
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/Login", post(session::login))
        .route("/SubmitScore", post(scores::submit_score))
        .route("/FetchScores", post(scores::fetch_scores))
        .route("/FetchQuestions", post(questions::fetch_all_questions))
        .route("/CreateTest", post(tests::create_test))
        .route("/FetchTest", post(tests::fetch_test))
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
