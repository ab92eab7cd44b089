use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct User {
    pub id: String,
    pub display_name: String,
    pub email: String,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(display_name: String, email: String, avatar_url: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            display_name,
            email,
            avatar_url,
            created_at: Utc::now(),
        }
    }
}
