use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A photo album entry from a trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Memory {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub location: String,
    pub date: NaiveDate,
    pub images: Vec<String>,
    pub description: String,
    pub tags: Vec<String>,
    pub trip: Option<String>,
    pub likes: u32,
    pub is_liked: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMemory {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Names of the uploaded images. File storage is not wired up, so each
    /// name becomes a placeholder URL.
    #[serde(default)]
    pub image_names: Vec<String>,
}

/// One accepted file from a memory upload.
#[derive(Debug, Clone, Serialize)]
pub struct UploadedImage {
    pub id: String,
    pub name: String,
    pub size: usize,
    #[serde(rename = "type")]
    pub content_type: String,
    pub url: String,
}
