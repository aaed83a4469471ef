//! Trip CRUD.

use chrono::Utc;
use tripdeck_core::{ActivityKind, NewActivity, NewTrip, Trip, TripUpdate};

use crate::{new_id, require, MemoryStore, StoreError};

fn validate_dates(trip: &Trip) -> Result<(), StoreError> {
    if trip.end_date < trip.start_date {
        return Err(StoreError::Validation(
            "endDate must not be before startDate".to_string(),
        ));
    }
    Ok(())
}

impl MemoryStore {
    /// Creates a trip owned by `user_id` and records a `trip_created` activity.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] when the title or destination is
    /// blank, or the end date precedes the start date.
    pub async fn create_trip(&self, user_id: &str, new: NewTrip) -> Result<Trip, StoreError> {
        require("title", &new.title)?;
        require("destination", &new.destination)?;

        let now = Utc::now();
        let trip = Trip {
            id: new_id("trip"),
            user_id: user_id.to_string(),
            title: new.title,
            destination: new.destination,
            description: new.description,
            start_date: new.start_date,
            end_date: new.end_date,
            travelers: new.travelers,
            budget: new.budget,
            travel_style: new.travel_style,
            interests: new.interests,
            status: new.status,
            total_cost: new.total_cost,
            currency: new.currency,
            itinerary: new.itinerary,
            created_at: now,
            updated_at: now,
        };
        validate_dates(&trip)?;

        let mut tables = self.tables.write().await;
        tables.trips.push(trip.clone());
        tables.push_activity(
            user_id,
            NewActivity {
                kind: ActivityKind::TripCreated,
                title: "New Trip Created".to_string(),
                description: format!("Created trip to {}", trip.destination),
                related_id: Some(trip.id.clone()),
            },
        );
        tracing::debug!(trip_id = %trip.id, "trip created");
        Ok(trip)
    }

    /// All trips owned by `user_id`, in creation order.
    pub async fn list_trips(&self, user_id: &str) -> Vec<Trip> {
        self.tables
            .read()
            .await
            .trips
            .iter()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect()
    }

    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when the trip does not exist or is
    /// owned by another user.
    pub async fn get_trip(&self, user_id: &str, trip_id: &str) -> Result<Trip, StoreError> {
        self.tables
            .read()
            .await
            .trips
            .iter()
            .find(|t| t.id == trip_id && t.user_id == user_id)
            .cloned()
            .ok_or(StoreError::NotFound("trip"))
    }

    /// Applies a sparse update and records a `trip_updated` activity.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] for missing or foreign trips and
    /// [`StoreError::Validation`] when the result would be invalid. A failed
    /// update leaves the stored trip untouched.
    pub async fn update_trip(
        &self,
        user_id: &str,
        trip_id: &str,
        update: TripUpdate,
    ) -> Result<Trip, StoreError> {
        let mut tables = self.tables.write().await;
        let stored = tables
            .trips
            .iter_mut()
            .find(|t| t.id == trip_id && t.user_id == user_id)
            .ok_or(StoreError::NotFound("trip"))?;

        let mut trip = stored.clone();
        if let Some(title) = update.title {
            require("title", &title)?;
            trip.title = title;
        }
        if let Some(destination) = update.destination {
            require("destination", &destination)?;
            trip.destination = destination;
        }
        if let Some(description) = update.description {
            trip.description = Some(description);
        }
        if let Some(start_date) = update.start_date {
            trip.start_date = start_date;
        }
        if let Some(end_date) = update.end_date {
            trip.end_date = end_date;
        }
        if let Some(travelers) = update.travelers {
            trip.travelers = travelers;
        }
        if let Some(budget) = update.budget {
            trip.budget = budget;
        }
        if let Some(travel_style) = update.travel_style {
            trip.travel_style = travel_style;
        }
        if let Some(interests) = update.interests {
            trip.interests = interests;
        }
        if let Some(status) = update.status {
            trip.status = status;
        }
        if let Some(total_cost) = update.total_cost {
            trip.total_cost = Some(total_cost);
        }
        if let Some(currency) = update.currency {
            trip.currency = currency;
        }
        if let Some(itinerary) = update.itinerary {
            trip.itinerary = itinerary;
        }
        validate_dates(&trip)?;
        trip.updated_at = Utc::now();
        *stored = trip.clone();

        tables.push_activity(
            user_id,
            NewActivity {
                kind: ActivityKind::TripUpdated,
                title: "Trip Updated".to_string(),
                description: format!("Updated trip to {}", trip.destination),
                related_id: Some(trip.id.clone()),
            },
        );
        Ok(trip)
    }

    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] for missing or foreign trips.
    pub async fn delete_trip(&self, user_id: &str, trip_id: &str) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        let index = tables
            .trips
            .iter()
            .position(|t| t.id == trip_id && t.user_id == user_id)
            .ok_or(StoreError::NotFound("trip"))?;
        tables.trips.remove(index);
        tracing::debug!(trip_id, "trip deleted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "trips_test.rs"]
pub(crate) mod tests;
