//! Saved places and their wishlist/planning/visited status.

use chrono::Utc;
use tripdeck_core::{ActivityKind, NewActivity, NewSavedPlace, SavedPlace, SavedPlaceUpdate};

use crate::{new_id, require, MemoryStore, StoreError};

fn validate_rating(rating: Option<f64>) -> Result<(), StoreError> {
    match rating {
        Some(r) if !(0.0..=5.0).contains(&r) => Err(StoreError::Validation(
            "rating must be between 0 and 5".to_string(),
        )),
        _ => Ok(()),
    }
}

impl MemoryStore {
    /// Saves a place for `user_id` and records a `place_saved` activity.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] when the name is blank or the
    /// rating falls outside 0 to 5.
    pub async fn save_place(
        &self,
        user_id: &str,
        new: NewSavedPlace,
    ) -> Result<SavedPlace, StoreError> {
        require("name", &new.name)?;
        validate_rating(new.rating)?;

        let now = Utc::now();
        let place = SavedPlace {
            id: new_id("place"),
            user_id: user_id.to_string(),
            name: new.name,
            kind: new.kind,
            location: new.location,
            coordinates: new.coordinates,
            description: new.description,
            rating: new.rating,
            cost: new.cost,
            images: new.images,
            notes: new.notes,
            tags: new.tags,
            visit_status: new.visit_status,
            created_at: now,
            updated_at: now,
        };

        let mut tables = self.tables.write().await;
        tables.saved_places.push(place.clone());
        tables.push_activity(
            user_id,
            NewActivity {
                kind: ActivityKind::PlaceSaved,
                title: "Saved Place".to_string(),
                description: format!("Added {} to {}", place.name, place.visit_status),
                related_id: Some(place.id.clone()),
            },
        );
        Ok(place)
    }

    pub async fn list_saved_places(&self, user_id: &str) -> Vec<SavedPlace> {
        self.tables
            .read()
            .await
            .saved_places
            .iter()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect()
    }

    /// Moves a saved place between statuses and edits its annotations.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] for missing or foreign places and
    /// [`StoreError::Validation`] for an out-of-range rating.
    pub async fn update_saved_place(
        &self,
        user_id: &str,
        place_id: &str,
        update: SavedPlaceUpdate,
    ) -> Result<SavedPlace, StoreError> {
        validate_rating(update.rating)?;

        let mut tables = self.tables.write().await;
        let place = tables
            .saved_places
            .iter_mut()
            .find(|p| p.id == place_id && p.user_id == user_id)
            .ok_or(StoreError::NotFound("saved place"))?;

        if let Some(status) = update.visit_status {
            place.visit_status = status;
        }
        if let Some(notes) = update.notes {
            place.notes = Some(notes);
        }
        if let Some(tags) = update.tags {
            place.tags = tags;
        }
        if let Some(rating) = update.rating {
            place.rating = Some(rating);
        }
        place.updated_at = Utc::now();
        Ok(place.clone())
    }

    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] for missing or foreign places.
    pub async fn delete_saved_place(&self, user_id: &str, place_id: &str) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        let index = tables
            .saved_places
            .iter()
            .position(|p| p.id == place_id && p.user_id == user_id)
            .ok_or(StoreError::NotFound("saved place"))?;
        tables.saved_places.remove(index);
        Ok(())
    }
}
