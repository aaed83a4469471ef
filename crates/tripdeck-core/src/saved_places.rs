use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::places::Coordinate;

/// Where a saved place sits in the user's plans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisitStatus {
    #[default]
    Wishlist,
    Planning,
    Visited,
}

impl std::fmt::Display for VisitStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VisitStatus::Wishlist => write!(f, "wishlist"),
            VisitStatus::Planning => write!(f, "planning"),
            VisitStatus::Visited => write!(f, "visited"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedPlace {
    pub id: String,
    pub user_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub location: String,
    pub coordinates: Option<Coordinate>,
    pub description: Option<String>,
    pub rating: Option<f64>,
    pub cost: Option<String>,
    pub images: Vec<String>,
    pub notes: Option<String>,
    pub tags: Vec<String>,
    pub visit_status: VisitStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSavedPlace {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub location: String,
    pub coordinates: Option<Coordinate>,
    pub description: Option<String>,
    pub rating: Option<f64>,
    pub cost: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    pub notes: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub visit_status: VisitStatus,
}

/// Status transition and annotation edits for a saved place.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SavedPlaceUpdate {
    pub visit_status: Option<VisitStatus>,
    pub notes: Option<String>,
    pub tags: Option<Vec<String>>,
    pub rating: Option<f64>,
}
