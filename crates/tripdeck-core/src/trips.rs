use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripStatus {
    #[default]
    Planning,
    Booked,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: String,
    pub user_id: String,
    pub title: String,
    /// Free-form `"City, Country"`; the last comma segment counts as the country.
    pub destination: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub travelers: u32,
    pub budget: String,
    pub travel_style: String,
    pub interests: Vec<String>,
    pub status: TripStatus,
    pub total_cost: Option<f64>,
    pub currency: String,
    pub itinerary: Vec<TripDay>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Trip {
    /// Country portion of the destination, if the destination names one.
    #[must_use]
    pub fn country(&self) -> Option<&str> {
        self.destination
            .rsplit(',')
            .next()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripDay {
    pub day: u32,
    pub date: NaiveDate,
    #[serde(default)]
    pub activities: Vec<ItineraryItem>,
    #[serde(default)]
    pub total_day_cost: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryItem {
    pub name: String,
    /// `attraction`, `restaurant`, `activity`, `shopping` or `transport`.
    #[serde(rename = "type")]
    pub kind: String,
    pub description: Option<String>,
    pub location: String,
    #[serde(default)]
    pub cost: f64,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub time: String,
    pub rating: Option<f64>,
    pub notes: Option<String>,
}

fn default_travelers() -> u32 {
    1
}

fn default_currency() -> String {
    "USD".to_string()
}

/// Body of a trip creation request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTrip {
    pub title: String,
    pub destination: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default = "default_travelers")]
    pub travelers: u32,
    #[serde(default)]
    pub budget: String,
    #[serde(default)]
    pub travel_style: String,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub status: TripStatus,
    pub total_cost: Option<f64>,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub itinerary: Vec<TripDay>,
}

/// Sparse trip update; absent fields keep their current value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TripUpdate {
    pub title: Option<String>,
    pub destination: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub travelers: Option<u32>,
    pub budget: Option<String>,
    pub travel_style: Option<String>,
    pub interests: Option<Vec<String>>,
    pub status: Option<TripStatus>,
    pub total_cost: Option<f64>,
    pub currency: Option<String>,
    pub itinerary: Option<Vec<TripDay>>,
}
