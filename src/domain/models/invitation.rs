use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use rand::{distributions::Alphanumeric, Rng};

pub const INVITATION_PENDING: &str = "PENDING";
pub const INVITATION_ACCEPTED: &str = "ACCEPTED";
pub const INVITATION_DECLINED: &str = "DECLINED";

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Invitation {
    pub id: String,
    pub event_id: String,
    pub invited_by: String,
    pub token: String,
    pub email: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl Invitation {
    pub fn new(event_id: String, invited_by: String, email: Option<String>) -> Self {
        let token: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(32)
            .map(char::from)
            .collect();

        Self {
            id: Uuid::new_v4().to_string(),
            event_id,
            invited_by,
            token,
            email,
            status: INVITATION_PENDING.to_string(),
            created_at: Utc::now(),
        }
    }
}
