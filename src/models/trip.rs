use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
pub struct TripRequest {
    pub destination: String,
    pub from_date: String,
    pub to_date: String,
    pub days: u32,
    pub budget: String,
    #[serde(default)]
    pub interests: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ItineraryRecord {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: ObjectId,
    pub destination: String,
    pub raw_text: String,
    pub html: String,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TripSummaryResponse {
    pub summary: String,
}
