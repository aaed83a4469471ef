//! In-memory stand-in for the application database.
//!
//! One [`MemoryStore`] is shared behind an `Arc` by the HTTP layer. Every
//! record is owned by a user id; lookups for a record owned by someone else
//! report [`StoreError::NotFound`] so callers cannot probe foreign ids.

pub mod activity;
pub mod memories;
pub mod saved_places;
pub mod seed;
pub mod settings;
pub mod stats;
pub mod trips;

use std::collections::HashMap;

use thiserror::Error;
use tokio::sync::RwLock;
use tripdeck_core::{Memory, NewActivity, SavedPlace, Trip, UserActivity, UserSettings};
use uuid::Uuid;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("{0}")]
    Validation(String),
}

#[derive(Debug, Default)]
struct Tables {
    trips: Vec<Trip>,
    saved_places: Vec<SavedPlace>,
    /// Append-only, oldest first.
    activities: Vec<UserActivity>,
    memories: Vec<Memory>,
    settings: HashMap<String, UserSettings>,
}

impl Tables {
    fn push_activity(&mut self, user_id: &str, activity: NewActivity) -> UserActivity {
        let record = UserActivity {
            id: new_id("activity"),
            user_id: user_id.to_string(),
            kind: activity.kind,
            title: activity.title,
            description: activity.description,
            related_id: activity.related_id,
            created_at: chrono::Utc::now(),
        };
        self.activities.push(record.clone());
        record
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Identifier of the form `<kind>_<32 hex chars>`.
pub(crate) fn new_id(kind: &str) -> String {
    format!("{kind}_{}", Uuid::new_v4().simple())
}

/// Rejects blank required text fields.
pub(crate) fn require(field: &str, value: &str) -> Result<(), StoreError> {
    if value.trim().is_empty() {
        return Err(StoreError::Validation(format!("{field} is required")));
    }
    Ok(())
}
