use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    pub profile: Profile,
    pub notifications: NotificationPreferences,
    pub preferences: Preferences,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub bio: String,
    pub location: String,
    pub website: String,
    pub avatar: String,
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPreferences {
    pub email: bool,
    pub push: bool,
    pub sms: bool,
    pub marketing: bool,
    pub trip_updates: bool,
    pub price_alerts: bool,
    pub recommendations: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub currency: String,
    pub language: String,
    pub timezone: String,
    pub units: String,
    pub travel_style: String,
    pub budget_range: String,
}

/// Settings edit: each section present in the body replaces the stored one.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsUpdate {
    pub profile: Option<Profile>,
    pub notifications: Option<NotificationPreferences>,
    pub preferences: Option<Preferences>,
}

impl UserSettings {
    pub fn apply(&mut self, update: SettingsUpdate) {
        if let Some(profile) = update.profile {
            self.profile = profile;
        }
        if let Some(notifications) = update.notifications {
            self.notifications = notifications;
        }
        if let Some(preferences) = update.preferences {
            self.preferences = preferences;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub message: String,
    pub time: String,
    pub read: bool,
    pub priority: String,
    pub action_url: Option<String>,
    pub created_at: DateTime<Utc>,
}
