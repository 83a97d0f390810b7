// src/main.rs

use std::net::SocketAddr;
use std::sync::Arc;

use dotenvy::dotenv;
use serde::Deserialize;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use quizbff::config::Config;
use quizbff::repository::Repository;
use quizbff::routes;
use quizbff::state::AppState;
use quizbff::store::{DocumentStore, MemoryStore, to_fields};
use quizbff::utils::id::RandomIdGenerator;

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenv().ok();

    // Load configuration from environment
    let config = Config::from_env();

    let file_appender = tracing_appender::rolling::daily("logs", "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(&config.rust_log);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    // Initialize Tracing (Logging)
    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    // The document store backing the repository. A production deployment
    // would construct the managed-store client here instead.
    let store: Arc<dyn DocumentStore> = Arc::new(MemoryStore::new());

    // Seed the question bank from file, if configured
    if let Some(path) = &config.question_bank {
        match seed_question_bank(store.as_ref(), path).await {
            Ok(count) => tracing::info!("Seeded {} questions from {}", count, path),
            Err(e) => tracing::error!("Failed to seed question bank: {}", e),
        }
    }

    // Create AppState
    let state = AppState {
        repository: Repository::new(store),
        ids: Arc::new(RandomIdGenerator::new()),
        config: config.clone(),
    };

    // Create the Axum application router
    let app = routes::create_router(state);

    // Bind to the listening address
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();

    // Start the server
    axum::serve(listener, app).await.unwrap();
}

#[derive(Deserialize)]
struct SeedQuestion {
    text: String,
    choices: Vec<String>,
}

#[derive(serde::Serialize)]
struct TextField<'a> {
    text: &'a str,
}

/// Loads a JSON question bank (`[{ "text": ..., "choices": [...] }, ...]`)
/// into the store. Questions are otherwise authored out-of-band.
async fn seed_question_bank(
    store: &dyn DocumentStore,
    path: &str,
) -> Result<usize, Box<dyn std::error::Error>> {
    let raw = std::fs::read_to_string(path)?;
    let bank: Vec<SeedQuestion> = serde_json::from_str(&raw)?;

    for question in &bank {
        let question_id = store
            .add("questions", to_fields(&TextField { text: &question.text })?)
            .await?;
        for choice in &question.choices {
            store
                .add(
                    &format!("questions/{}/choices", question_id),
                    to_fields(&TextField { text: choice })?,
                )
                .await?;
        }
    }

    Ok(bank.len())
}
