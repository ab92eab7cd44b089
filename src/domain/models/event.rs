use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// One-to-one events get a random giftee draw; group events share a
/// claimable wish list.
pub const EVENT_TYPE_ONE_TO_ONE: &str = "ONE_TO_ONE";
pub const EVENT_TYPE_GROUP: &str = "GROUP";

pub const EVENT_STATUS_OPEN: &str = "OPEN";
pub const EVENT_STATUS_ASSIGNED: &str = "ASSIGNED";

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Event {
    pub id: String,
    pub owner_id: String,
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    pub event_type: String,
    pub event_date: DateTime<Utc>,
    pub budget_cents: Option<i64>,
    pub image_url: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
