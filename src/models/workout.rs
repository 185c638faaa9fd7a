// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Workout model: a single recorded running or cycling session.

use crate::time_utils::format_month_day;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Rejection signal for workout creation.
///
/// Creation is the only validation boundary; there is deliberately no
/// field-level detail here, just one generic invalid-input error.
#[derive(Debug, thiserror::Error)]
#[error("workout inputs must be positive finite numbers")]
pub struct InvalidInput;

/// The type-specific part of a workout.
///
/// Serializes flat alongside the base fields, discriminated by `type`,
/// so the stored format is `{"type": "running", "cadence": 150, ...}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WorkoutKind {
    Running {
        /// Cadence in steps/min
        cadence: f64,
    },
    Cycling {
        /// Elevation gain in meters (may be zero or negative for a
        /// net-downhill ride)
        #[serde(rename = "elvGain")]
        elevation_gain: f64,
    },
}

impl WorkoutKind {
    /// Lowercase type tag, as used in storage and API payloads.
    pub fn label(&self) -> &'static str {
        match self {
            WorkoutKind::Running { .. } => "running",
            WorkoutKind::Cycling { .. } => "cycling",
        }
    }
}

/// A recorded workout session, pinned to a map coordinate.
///
/// `id`, `date`, and `clicks` default when missing so that records
/// written by older clients (which never stored them) still load; such
/// records come back with a fresh id and timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workout {
    /// Unique identifier, assigned at creation
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// Map position as [latitude, longitude]
    pub coords: [f64; 2],
    /// Distance in kilometers
    pub distance: f64,
    /// Duration in minutes
    pub duration: f64,
    /// Creation timestamp
    #[serde(default = "Utc::now")]
    pub date: DateTime<Utc>,
    /// Number of focus interactions (list item / marker clicks)
    #[serde(default)]
    pub clicks: u32,
    #[serde(flatten)]
    pub kind: WorkoutKind,
}

fn positive_finite(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

impl Workout {
    /// Create a workout, validating the numeric inputs.
    ///
    /// Distance, duration, and running cadence must be finite and
    /// strictly positive. Cycling elevation gain only has to be finite;
    /// zero and negative values are accepted.
    pub fn new(
        kind: WorkoutKind,
        coords: [f64; 2],
        distance: f64,
        duration: f64,
    ) -> Result<Self, InvalidInput> {
        let kind_ok = match kind {
            WorkoutKind::Running { cadence } => positive_finite(cadence),
            WorkoutKind::Cycling { elevation_gain } => elevation_gain.is_finite(),
        };
        if !positive_finite(distance) || !positive_finite(duration) || !kind_ok {
            return Err(InvalidInput);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            coords,
            distance,
            duration,
            date: Utc::now(),
            clicks: 0,
            kind,
        })
    }

    /// Overwrite the mutable fields in place on edit-save.
    ///
    /// `extra` is the cadence for running workouts and the elevation
    /// gain for cycling ones. Inputs are not revalidated here; the
    /// creation path is the only validation boundary.
    pub fn update(&mut self, distance: f64, duration: f64, extra: f64) {
        self.distance = distance;
        self.duration = duration;
        match &mut self.kind {
            WorkoutKind::Running { cadence } => *cadence = extra,
            WorkoutKind::Cycling { elevation_gain } => *elevation_gain = extra,
        }
    }

    /// Record a focus interaction.
    pub fn record_click(&mut self) {
        self.clicks += 1;
    }

    /// Pace in min/km. `None` for cycling workouts.
    ///
    /// Always computed from the current distance and duration, so it
    /// can never go stale after an update.
    pub fn pace(&self) -> Option<f64> {
        match self.kind {
            WorkoutKind::Running { .. } => Some(self.duration / self.distance),
            WorkoutKind::Cycling { .. } => None,
        }
    }

    /// Speed in km/h. `None` for running workouts.
    pub fn speed(&self) -> Option<f64> {
        match self.kind {
            WorkoutKind::Cycling { .. } => Some(self.distance / (self.duration / 60.0)),
            WorkoutKind::Running { .. } => None,
        }
    }

    /// Display title, e.g. "Running on June 5".
    pub fn description(&self) -> String {
        let name = match self.kind {
            WorkoutKind::Running { .. } => "Running",
            WorkoutKind::Cycling { .. } => "Cycling",
        };
        format!("{} on {}", name, format_month_day(self.date))
    }
}
