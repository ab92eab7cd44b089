use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct RegisterUserRequest {
    pub display_name: String,
    pub email: String,
    pub avatar_url: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateEventRequest {
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    pub event_type: String,
    pub event_date: DateTime<Utc>,
    pub budget_cents: Option<i64>,
    pub image_url: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateEventRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub event_date: Option<DateTime<Utc>>,
    pub budget_cents: Option<i64>,
    pub image_url: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateInvitationRequest {
    pub email: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateWishRequest {
    pub title: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub price_cents: Option<i64>,
    pub image_url: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateWishRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub price_cents: Option<i64>,
    pub image_url: Option<String>,
}
