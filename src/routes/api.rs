// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! JSON API for the workout log.

use crate::error::{AppError, Result};
use crate::models::{Workout, WorkoutKind};
use crate::services::SortDirection;
use crate::time_utils::format_utc_rfc3339;
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Workout API routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/api/workouts",
            get(list_workouts)
                .post(create_workout)
                .delete(clear_workouts),
        )
        .route("/api/workouts/sort", post(sort_workouts))
        .route(
            "/api/workouts/{id}",
            get(get_workout).put(update_workout).delete(delete_workout),
        )
        .route("/api/workouts/{id}/click", post(click_workout))
}

// ─── Response shapes ─────────────────────────────────────────

/// A workout as rendered to the client: the stored fields plus the
/// derived description and pace/speed, so the frontend never computes.
#[derive(Serialize, Clone, Debug)]
pub struct WorkoutResponse {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub description: String,
    pub coords: [f64; 2],
    pub distance: f64,
    pub duration: f64,
    pub date: String,
    pub clicks: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cadence: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pace: Option<f64>,
    #[serde(rename = "elvGain", skip_serializing_if = "Option::is_none")]
    pub elevation_gain: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
}

impl From<&Workout> for WorkoutResponse {
    fn from(workout: &Workout) -> Self {
        let (cadence, elevation_gain) = match workout.kind {
            WorkoutKind::Running { cadence } => (Some(cadence), None),
            WorkoutKind::Cycling { elevation_gain } => (None, Some(elevation_gain)),
        };

        Self {
            id: workout.id,
            kind: workout.kind.label(),
            description: workout.description(),
            coords: workout.coords,
            distance: workout.distance,
            duration: workout.duration,
            date: format_utc_rfc3339(workout.date),
            clicks: workout.clicks,
            cadence,
            pace: workout.pace(),
            elevation_gain,
            speed: workout.speed(),
        }
    }
}

#[derive(Serialize)]
pub struct WorkoutsResponse {
    pub workouts: Vec<WorkoutResponse>,
    pub total: u32,
}

// ─── List / filter ───────────────────────────────────────────

#[derive(Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
enum KindFilter {
    Running,
    Cycling,
}

#[derive(Deserialize)]
struct ListQuery {
    /// Filter by workout type
    #[serde(rename = "type")]
    kind: Option<KindFilter>,
}

fn matches_filter(workout: &Workout, filter: Option<KindFilter>) -> bool {
    match (filter, &workout.kind) {
        (None, _) => true,
        (Some(KindFilter::Running), WorkoutKind::Running { .. }) => true,
        (Some(KindFilter::Cycling), WorkoutKind::Cycling { .. }) => true,
        _ => false,
    }
}

/// List workouts in their current order, optionally filtered by type.
async fn list_workouts(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListQuery>,
) -> Result<Json<WorkoutsResponse>> {
    let log = state.log.read().await;

    let workouts: Vec<WorkoutResponse> = log
        .workouts()
        .iter()
        .filter(|w| matches_filter(w, params.kind))
        .map(WorkoutResponse::from)
        .collect();

    Ok(Json(WorkoutsResponse {
        total: workouts.len() as u32,
        workouts,
    }))
}

// ─── Create ──────────────────────────────────────────────────

#[derive(Deserialize)]
struct CreateWorkoutRequest {
    /// [latitude, longitude] from the dropped pin
    coords: [f64; 2],
    /// Distance in km
    distance: f64,
    /// Duration in minutes
    duration: f64,
    #[serde(flatten)]
    kind: WorkoutKind,
}

/// Record a new workout from the form submission.
async fn create_workout(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateWorkoutRequest>,
) -> Result<(StatusCode, Json<WorkoutResponse>)> {
    let workout = Workout::new(req.kind, req.coords, req.distance, req.duration)?;

    tracing::info!(
        id = %workout.id,
        kind = workout.kind.label(),
        distance = workout.distance,
        "Recording workout"
    );

    let response = WorkoutResponse::from(&workout);
    let mut log = state.log.write().await;
    log.add(workout)?;

    Ok((StatusCode::CREATED, Json(response)))
}

// ─── Fetch one ───────────────────────────────────────────────

/// Fetch a single workout by id.
async fn get_workout(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<WorkoutResponse>> {
    let log = state.log.read().await;
    let workout = log
        .find(id)
        .ok_or_else(|| AppError::NotFound(format!("Workout {id} not found")))?;

    Ok(Json(WorkoutResponse::from(workout)))
}

// ─── Edit-save ───────────────────────────────────────────────

#[derive(Deserialize)]
struct UpdateWorkoutRequest {
    distance: f64,
    duration: f64,
    /// Required for running workouts
    cadence: Option<f64>,
    /// Required for cycling workouts
    #[serde(rename = "elvGain")]
    elevation_gain: Option<f64>,
}

/// Save an edit: overwrite the mutable fields, then return the workout
/// with its freshly computed pace or speed.
async fn update_workout(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateWorkoutRequest>,
) -> Result<Json<WorkoutResponse>> {
    let mut log = state.log.write().await;

    let workout = log
        .find(id)
        .ok_or_else(|| AppError::NotFound(format!("Workout {id} not found")))?;
    let extra = match workout.kind {
        WorkoutKind::Running { .. } => req.cadence.ok_or_else(|| {
            AppError::BadRequest("'cadence' is required for running workouts".to_string())
        })?,
        WorkoutKind::Cycling { .. } => req.elevation_gain.ok_or_else(|| {
            AppError::BadRequest("'elvGain' is required for cycling workouts".to_string())
        })?,
    };

    log.update(id, req.distance, req.duration, extra)?;

    // Still present; the write lock was held across the update.
    let workout = log
        .find(id)
        .ok_or_else(|| AppError::NotFound(format!("Workout {id} not found")))?;
    Ok(Json(WorkoutResponse::from(workout)))
}

// ─── Focus interaction ───────────────────────────────────────

/// Count a focus interaction (list item or marker click).
async fn click_workout(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<WorkoutResponse>> {
    let mut log = state.log.write().await;

    if !log.record_click(id)? {
        return Err(AppError::NotFound(format!("Workout {id} not found")));
    }

    let workout = log
        .find(id)
        .ok_or_else(|| AppError::NotFound(format!("Workout {id} not found")))?;
    Ok(Json(WorkoutResponse::from(workout)))
}

// ─── Sort ────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct SortResponse {
    pub direction: SortDirection,
    pub workouts: Vec<WorkoutResponse>,
}

/// Sort the list by distance, alternating direction across calls.
async fn sort_workouts(State(state): State<Arc<AppState>>) -> Result<Json<SortResponse>> {
    let mut log = state.log.write().await;
    let direction = log.sort_by_distance()?;

    tracing::debug!(?direction, "Sorted workouts by distance");

    let workouts = log.workouts().iter().map(WorkoutResponse::from).collect();
    Ok(Json(SortResponse {
        direction,
        workouts,
    }))
}

// ─── Delete ──────────────────────────────────────────────────

/// Delete a workout. Unknown ids are ignored, not an error.
async fn delete_workout(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    let mut log = state.log.write().await;

    if !log.remove(id)? {
        tracing::debug!(%id, "Delete for unknown workout id ignored");
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Delete every workout and the stored key.
async fn clear_workouts(State(state): State<Arc<AppState>>) -> Result<StatusCode> {
    let mut log = state.log.write().await;
    log.clear()?;

    tracing::info!("Cleared all workouts");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_filter() {
        let running = Workout::new(
            WorkoutKind::Running { cadence: 150.0 },
            [0.0, 0.0],
            5.0,
            30.0,
        )
        .unwrap();

        assert!(matches_filter(&running, None));
        assert!(matches_filter(&running, Some(KindFilter::Running)));
        assert!(!matches_filter(&running, Some(KindFilter::Cycling)));
    }

    #[test]
    fn test_response_carries_derived_fields() {
        let running = Workout::new(
            WorkoutKind::Running { cadence: 150.0 },
            [0.0, 0.0],
            5.0,
            30.0,
        )
        .unwrap();

        let response = WorkoutResponse::from(&running);
        assert_eq!(response.kind, "running");
        assert_eq!(response.pace, Some(6.0));
        assert_eq!(response.speed, None);
        assert_eq!(response.elevation_gain, None);
    }
}
