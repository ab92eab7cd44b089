use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// One giver→receiver pair of a draw. The rows for an event form a
/// fixed-point-free bijection over its participants at draw time.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Assignment {
    pub id: String,
    pub event_id: String,
    pub giver_id: String,
    pub receiver_id: String,
    pub created_at: DateTime<Utc>,
}

impl Assignment {
    pub fn new(event_id: String, giver_id: String, receiver_id: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            event_id,
            giver_id,
            receiver_id,
            created_at: Utc::now(),
        }
    }
}
