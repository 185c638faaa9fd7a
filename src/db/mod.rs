//! Storage layer (local JSON key-value files).

pub mod local;

pub use local::{LocalStore, StoreError};

/// Storage keys as constants.
pub mod keys {
    /// The full workout list, as one JSON array.
    pub const WORKOUTS: &str = "workouts";
}
