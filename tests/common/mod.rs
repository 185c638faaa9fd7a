// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use pinlog::config::Config;
use pinlog::db::LocalStore;
use pinlog::routes::create_router;
use pinlog::services::WorkoutLog;
use pinlog::AppState;
use std::sync::Arc;
use tempfile::TempDir;

/// Create a test app backed by a throwaway data directory.
///
/// The returned `TempDir` must stay alive for the duration of the test;
/// dropping it deletes the store.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>, TempDir) {
    let data_dir = TempDir::new().expect("Failed to create temp data dir");

    let config = Config {
        data_dir: data_dir.path().to_path_buf(),
        ..Config::default()
    };

    let store = LocalStore::open(config.data_dir.clone()).expect("Failed to open store");
    let log = WorkoutLog::open(store).expect("Failed to load workouts");

    let state = Arc::new(AppState {
        config,
        log: tokio::sync::RwLock::new(log),
    });

    (create_router(state.clone()), state, data_dir)
}
