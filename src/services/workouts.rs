// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout list manager.
//!
//! Sole owner of the in-memory workout sequence; every mutation keeps
//! the local store in sync by rewriting the full list.

use crate::db::{LocalStore, StoreError};
use crate::models::Workout;
use serde::Serialize;
use uuid::Uuid;

/// Direction used by a distance sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Descending,
    Ascending,
}

/// Ordered workout collection plus its persistence handle.
///
/// The sort-direction flag lives here rather than in ambient app state;
/// it starts out so that the first sort is descending.
pub struct WorkoutLog {
    store: LocalStore,
    workouts: Vec<Workout>,
    sort_ascending: bool,
}

impl WorkoutLog {
    /// Load the persisted list from `store`.
    ///
    /// Fails fast on malformed stored data; an absent key is an empty
    /// log, not an error.
    pub fn open(store: LocalStore) -> Result<Self, StoreError> {
        let workouts = store.load_workouts()?;
        Ok(Self {
            store,
            workouts,
            sort_ascending: false,
        })
    }

    /// The current sequence, in list order.
    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    /// Linear lookup by id.
    pub fn find(&self, id: Uuid) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id == id)
    }

    /// Append a workout and save.
    pub fn add(&mut self, workout: Workout) -> Result<(), StoreError> {
        self.workouts.push(workout);
        self.store.save_workouts(&self.workouts)
    }

    /// Overwrite a workout's mutable fields and save.
    ///
    /// Returns `false` without touching storage when the id is unknown.
    pub fn update(
        &mut self,
        id: Uuid,
        distance: f64,
        duration: f64,
        extra: f64,
    ) -> Result<bool, StoreError> {
        let Some(workout) = self.workouts.iter_mut().find(|w| w.id == id) else {
            return Ok(false);
        };
        workout.update(distance, duration, extra);
        self.store.save_workouts(&self.workouts)?;
        Ok(true)
    }

    /// Record a focus interaction on a workout and save.
    pub fn record_click(&mut self, id: Uuid) -> Result<bool, StoreError> {
        let Some(workout) = self.workouts.iter_mut().find(|w| w.id == id) else {
            return Ok(false);
        };
        workout.record_click();
        self.store.save_workouts(&self.workouts)?;
        Ok(true)
    }

    /// Remove a workout by id.
    ///
    /// An unknown id is a no-op, not an error; storage is only touched
    /// when something was actually removed.
    pub fn remove(&mut self, id: Uuid) -> Result<bool, StoreError> {
        let before = self.workouts.len();
        self.workouts.retain(|w| w.id != id);
        if self.workouts.len() == before {
            return Ok(false);
        }
        self.store.save_workouts(&self.workouts)?;
        Ok(true)
    }

    /// Empty the list and delete the stored key.
    ///
    /// Deletes the key rather than saving an empty list, matching the
    /// localStorage-style reset the frontend expects.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.workouts.clear();
        self.store.reset_workouts()
    }

    /// Stable-sort the list by distance and save the new order.
    ///
    /// Alternates direction across calls: descending first, then
    /// ascending, and so on. Returns the direction that was applied.
    pub fn sort_by_distance(&mut self) -> Result<SortDirection, StoreError> {
        let direction = if self.sort_ascending {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        };

        match direction {
            SortDirection::Ascending => self
                .workouts
                .sort_by(|a, b| a.distance.total_cmp(&b.distance)),
            SortDirection::Descending => self
                .workouts
                .sort_by(|a, b| b.distance.total_cmp(&a.distance)),
        }
        self.sort_ascending = !self.sort_ascending;

        self.store.save_workouts(&self.workouts)?;
        Ok(direction)
    }
}
