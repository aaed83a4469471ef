//! The per-user recent-activity feed.

use tripdeck_core::{NewActivity, UserActivity};

use crate::MemoryStore;

impl MemoryStore {
    pub async fn record_activity(&self, user_id: &str, activity: NewActivity) -> UserActivity {
        self.tables.write().await.push_activity(user_id, activity)
    }

    /// Newest first, at most `limit` entries.
    pub async fn recent_activities(&self, user_id: &str, limit: usize) -> Vec<UserActivity> {
        self.tables
            .read()
            .await
            .activities
            .iter()
            .rev()
            .filter(|a| a.user_id == user_id)
            .take(limit)
            .cloned()
            .collect()
    }
}
