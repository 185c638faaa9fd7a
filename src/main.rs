// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Pinlog API Server
//!
//! Serves the workout log for the map frontend: create, edit, delete,
//! sort, and filter running/cycling entries, persisted locally.

use pinlog::{config::Config, db::LocalStore, services::WorkoutLog, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting Pinlog API");

    // Open the local store and load the persisted workout list.
    // Corrupt stored data is surfaced here, once, instead of silently
    // starting with an empty list.
    let store = LocalStore::open(config.data_dir.clone()).expect("Failed to open data directory");
    let log = WorkoutLog::open(store).expect("Failed to load stored workouts");
    tracing::info!(count = log.workouts().len(), "Workout log loaded");

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        log: tokio::sync::RwLock::new(log),
    });

    // Build router
    let app = pinlog::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("pinlog=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
