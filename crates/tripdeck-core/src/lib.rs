pub mod activity;
pub mod app_config;
pub mod config;
pub mod memories;
pub mod places;
pub mod saved_places;
pub mod settings;
pub mod trips;

pub use activity::{ActivityKind, NewActivity, UserActivity, UserStats};
pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use memories::{Memory, NewMemory, UploadedImage};
pub use places::{CategoryFilter, Coordinate, NormalizedPlace, PlaceCategory, PlaceSource};
pub use saved_places::{NewSavedPlace, SavedPlace, SavedPlaceUpdate, VisitStatus};
pub use settings::{
    Notification, NotificationPreferences, Preferences, Profile, SettingsUpdate, UserSettings,
};
pub use trips::{ItineraryItem, NewTrip, Trip, TripDay, TripStatus, TripUpdate};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
