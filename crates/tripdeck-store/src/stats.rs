//! Dashboard statistics.

use std::collections::HashSet;

use tripdeck_core::{TripStatus, UserStats};

use crate::seed::sample_memories;
use crate::MemoryStore;

impl MemoryStore {
    /// Aggregates the user's trips, saved places and memories.
    ///
    /// Countries are the distinct last comma segments of trip destinations;
    /// the budget is the sum of trip total costs.
    pub async fn user_stats(&self, user_id: &str) -> UserStats {
        let tables = self.tables.read().await;
        let trips: Vec<_> = tables
            .trips
            .iter()
            .filter(|t| t.user_id == user_id)
            .collect();

        let countries: HashSet<String> = trips
            .iter()
            .filter_map(|t| t.country())
            .map(str::to_lowercase)
            .collect();

        let own_memories = tables
            .memories
            .iter()
            .filter(|m| m.user_id == user_id)
            .count();

        UserStats {
            total_trips: trips.len(),
            completed_trips: trips
                .iter()
                .filter(|t| t.status == TripStatus::Completed)
                .count(),
            countries_visited: countries.len(),
            total_budget: trips.iter().filter_map(|t| t.total_cost).sum(),
            saved_places: tables
                .saved_places
                .iter()
                .filter(|p| p.user_id == user_id)
                .count(),
            memories: own_memories + sample_memories(user_id).len(),
        }
    }
}
