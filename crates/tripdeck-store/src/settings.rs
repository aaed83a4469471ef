//! Per-user settings and the notification inbox.

use chrono::Utc;
use tripdeck_core::{Notification, SettingsUpdate, UserSettings};

use crate::seed::{default_settings, sample_notifications};
use crate::MemoryStore;

impl MemoryStore {
    pub async fn get_settings(&self, user_id: &str) -> UserSettings {
        self.tables
            .read()
            .await
            .settings
            .get(user_id)
            .cloned()
            .unwrap_or_else(default_settings)
    }

    /// Replaces each section present in `update` and returns the result.
    pub async fn update_settings(&self, user_id: &str, update: SettingsUpdate) -> UserSettings {
        let mut tables = self.tables.write().await;
        let settings = tables
            .settings
            .entry(user_id.to_string())
            .or_insert_with(default_settings);
        settings.apply(update);
        settings.clone()
    }

    pub async fn list_notifications(&self, _user_id: &str) -> Vec<Notification> {
        sample_notifications(Utc::now())
    }
}
