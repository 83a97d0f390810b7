// src/config.rs

use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    /// Port the server binds to.
    pub port: u16,

    /// Base URL embedded in CreateTest responses; the generated test ID is
    /// appended as the last path segment.
    pub test_base_url: String,

    /// Optional path to a JSON question-bank file seeded at startup.
    pub question_bank: Option<String>,

    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000);

        let test_base_url =
            env::var("TEST_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());

        let question_bank = env::var("QUESTION_BANK").ok();

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Self {
            port,
            test_base_url,
            question_bank,
            rust_log,
        }
    }
}
