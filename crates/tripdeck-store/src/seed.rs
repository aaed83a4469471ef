//! Fixed sample data served to every user alongside their own records.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use tripdeck_core::{
    Memory, Notification, NotificationPreferences, Preferences, Profile, UserSettings,
};

const MEMORY_IMAGE: &str = "/placeholder.svg?height=300&width=400";

fn midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(chrono::NaiveTime::MIN).and_utc()
}

/// Sample album entries every user sees after their own memories.
#[must_use]
pub fn sample_memories(user_id: &str) -> Vec<Memory> {
    let santorini = NaiveDate::from_ymd_opt(2024, 8, 15).unwrap_or_default();
    let tokyo = NaiveDate::from_ymd_opt(2024, 7, 22).unwrap_or_default();

    vec![
        Memory {
            id: "memory_sample_1".to_string(),
            user_id: user_id.to_string(),
            title: "Sunset at Santorini".to_string(),
            location: "Santorini, Greece".to_string(),
            date: santorini,
            images: vec![MEMORY_IMAGE.to_string()],
            description:
                "Amazing sunset view from Oia village. The colors were absolutely breathtaking!"
                    .to_string(),
            tags: ["sunset", "greece", "romantic", "photography"]
                .map(str::to_string)
                .to_vec(),
            trip: Some("Greek Islands Adventure".to_string()),
            likes: 24,
            is_liked: true,
            created_at: midnight(santorini),
        },
        Memory {
            id: "memory_sample_2".to_string(),
            user_id: user_id.to_string(),
            title: "Tokyo Street Food".to_string(),
            location: "Shibuya, Tokyo".to_string(),
            date: tokyo,
            images: vec![MEMORY_IMAGE.to_string()],
            description: "Incredible ramen and street food experience in the heart of Tokyo."
                .to_string(),
            tags: ["food", "japan", "street-food", "culture"]
                .map(str::to_string)
                .to_vec(),
            trip: Some("Japan Discovery".to_string()),
            likes: 18,
            is_liked: false,
            created_at: midnight(tokyo),
        },
    ]
}

/// The static notification inbox, timestamped relative to `now`.
#[must_use]
pub fn sample_notifications(now: DateTime<Utc>) -> Vec<Notification> {
    vec![
        Notification {
            id: "notification_1".to_string(),
            kind: "trip".to_string(),
            title: "Flight Confirmation".to_string(),
            message: "Your flight to Tokyo has been confirmed. Check-in opens 24 hours before departure.".to_string(),
            time: "2 hours ago".to_string(),
            read: false,
            priority: "high".to_string(),
            action_url: Some("/dashboard/trips/tokyo-2024".to_string()),
            created_at: now - Duration::hours(2),
        },
        Notification {
            id: "notification_2".to_string(),
            kind: "price".to_string(),
            title: "Price Drop Alert".to_string(),
            message: "Hotel prices in Kyoto dropped by 25%. Book now to save $150 on your stay."
                .to_string(),
            time: "4 hours ago".to_string(),
            read: false,
            priority: "medium".to_string(),
            action_url: Some("/dashboard/deals/kyoto-hotels".to_string()),
            created_at: now - Duration::hours(4),
        },
    ]
}

/// Settings a user has before their first edit.
#[must_use]
pub fn default_settings() -> UserSettings {
    UserSettings {
        profile: Profile {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            bio: "Passionate traveler exploring the world one destination at a time.".to_string(),
            location: "New York, USA".to_string(),
            website: "https://johndoe.travel".to_string(),
            avatar: "/placeholder.svg?height=96&width=96".to_string(),
        },
        notifications: NotificationPreferences {
            email: true,
            push: true,
            sms: false,
            marketing: true,
            trip_updates: true,
            price_alerts: true,
            recommendations: true,
        },
        preferences: Preferences {
            currency: "USD".to_string(),
            language: "en".to_string(),
            timezone: "America/New_York".to_string(),
            units: "metric".to_string(),
            travel_style: "adventure".to_string(),
            budget_range: "mid-range".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_memories_belong_to_requesting_user() {
        let memories = sample_memories("user_a");
        assert_eq!(memories.len(), 2);
        assert!(memories.iter().all(|m| m.user_id == "user_a"));
        assert_eq!(memories[0].date.to_string(), "2024-08-15");
    }

    #[test]
    fn notifications_are_unread_and_ordered() {
        let now = Utc::now();
        let notifications = sample_notifications(now);
        assert_eq!(notifications.len(), 2);
        assert!(notifications.iter().all(|n| !n.read));
        assert!(notifications[0].created_at > notifications[1].created_at);
    }
}
