// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Local key-value store backed by JSON files.
//!
//! Each key maps to one file under the configured data directory; a
//! value is written wholesale on every save, never diffed or batched.
//! This is the durable stand-in for the browser localStorage the
//! frontend would otherwise use.

use crate::db::keys;
use crate::models::Workout;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Errors from the local store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("stored data under '{key}' is not valid JSON: {source}")]
    Corrupt {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode workouts: {0}")]
    Encode(serde_json::Error),
}

/// File-per-key store rooted at a data directory.
#[derive(Debug, Clone)]
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    /// Open a store at `root`, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    /// Read the raw value for `key`. Absent key is `None`, not an error.
    pub fn get(&self, key: &'static str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// Overwrite the value for `key`.
    pub fn set(&self, key: &'static str, value: &str) -> Result<(), StoreError> {
        fs::write(self.key_path(key), value)?;
        Ok(())
    }

    /// Delete `key` outright. Deleting an absent key is fine.
    pub fn remove(&self, key: &'static str) -> Result<(), StoreError> {
        match fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    /// Load the stored workout list.
    ///
    /// An absent key yields an empty list. Malformed JSON fails fast
    /// here so the caller can surface it once at startup instead of
    /// silently dropping the user's history.
    pub fn load_workouts(&self) -> Result<Vec<Workout>, StoreError> {
        match self.get(keys::WORKOUTS)? {
            None => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
                key: keys::WORKOUTS,
                source,
            }),
        }
    }

    /// Serialize and store the full workout list, overwriting the key.
    pub fn save_workouts(&self, workouts: &[Workout]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(workouts).map_err(StoreError::Encode)?;
        self.set(keys::WORKOUTS, &raw)
    }

    /// Remove the workouts key entirely (distinct from saving `[]`).
    pub fn reset_workouts(&self) -> Result<(), StoreError> {
        self.remove(keys::WORKOUTS)
    }
}
