use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Wish {
    pub id: String,
    pub event_id: String,
    pub user_id: String,
    pub title: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub price_cents: Option<i64>,
    pub image_url: Option<String>,
    pub claimed_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

pub struct NewWishParams {
    pub event_id: String,
    pub user_id: String,
    pub title: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub price_cents: Option<i64>,
    pub image_url: Option<String>,
}

impl Wish {
    pub fn new(params: NewWishParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            event_id: params.event_id,
            user_id: params.user_id,
            title: params.title,
            description: params.description,
            url: params.url,
            price_cents: params.price_cents,
            image_url: params.image_url,
            claimed_by: None,
            created_at: Utc::now(),
        }
    }

    /// The wisher must never learn who claimed their wish.
    pub fn redacted_for(mut self, viewer_id: &str) -> Self {
        if self.user_id == viewer_id {
            self.claimed_by = None;
        }
        self
    }
}
