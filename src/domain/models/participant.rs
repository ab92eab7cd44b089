use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

pub const ROLE_OWNER: &str = "OWNER";
pub const ROLE_MEMBER: &str = "MEMBER";

/// A participant record exists only for users who have accepted; pending
/// membership lives in `Invitation`.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Participant {
    pub id: String,
    pub event_id: String,
    pub user_id: String,
    pub role: String,
    pub joined_at: DateTime<Utc>,
}

impl Participant {
    pub fn new(event_id: String, user_id: String, role: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            event_id,
            user_id,
            role: role.to_string(),
            joined_at: Utc::now(),
        }
    }
}
