// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Pinlog: record running and cycling workouts pinned to map coordinates.
//!
//! This crate provides the backend API for a map-based workout log:
//! the client drops a pin, submits distance/duration plus a cadence or
//! elevation figure, and the server keeps the ordered list and its
//! local persistent copy in sync.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use services::WorkoutLog;
use tokio::sync::RwLock;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub log: RwLock<WorkoutLog>,
}
