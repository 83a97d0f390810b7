// src/state.rs

use std::sync::Arc;

use axum::extract::FromRef;

use crate::config::Config;
use crate::repository::Repository;
use crate::utils::id::IdGenerator;

#[derive(Clone)]
pub struct AppState {
    pub repository: Repository,
    pub ids: Arc<dyn IdGenerator>,
    pub config: Config,
}

impl FromRef<AppState> for Repository {
    fn from_ref(state: &AppState) -> Self {
        state.repository.clone()
    }
}

impl FromRef<AppState> for Arc<dyn IdGenerator> {
    fn from_ref(state: &AppState) -> Self {
        state.ids.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
