use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::identity::UserId;
use crate::api::dtos::requests::{CreateEventRequest, UpdateEventRequest};
use crate::domain::models::event::{
    Event, EVENT_STATUS_OPEN, EVENT_TYPE_GROUP, EVENT_TYPE_ONE_TO_ONE,
};
use crate::domain::models::participant::{Participant, ROLE_OWNER};
use crate::error::AppError;
use std::sync::Arc;
use uuid::Uuid;
use chrono::Utc;
use tracing::info;

pub async fn create_event(
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
    Json(payload): Json<CreateEventRequest>,
) -> Result<impl IntoResponse, AppError> {
    match payload.event_type.as_str() {
        EVENT_TYPE_ONE_TO_ONE | EVENT_TYPE_GROUP => {},
        _ => return Err(AppError::Validation("Invalid event_type".into())),
    }

    if payload.title.trim().is_empty() {
        return Err(AppError::Validation("Title must not be empty".into()));
    }

    let event = Event {
        id: Uuid::new_v4().to_string(),
        owner_id: user_id.clone(),
        title: payload.title,
        description: payload.description,
        location: payload.location,
        event_type: payload.event_type,
        event_date: payload.event_date,
        budget_cents: payload.budget_cents,
        image_url: payload.image_url,
        status: EVENT_STATUS_OPEN.to_string(),
        created_at: Utc::now(),
    };

    let created = state.event_repo.create(&event).await?;

    // The owner takes part in their own event.
    let owner = Participant::new(created.id.clone(), user_id, ROLE_OWNER);
    state.participant_repo.create(&owner).await?;

    info!("Created event {} ({})", created.id, created.event_type);
    Ok(Json(created))
}

pub async fn list_events(
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
) -> Result<impl IntoResponse, AppError> {
    let events = state.event_repo.list_by_user(&user_id).await?;
    Ok(Json(events))
}

pub async fn get_event(
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
    Path(event_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let event = state.event_repo.find_by_id(&event_id).await?
        .ok_or(AppError::NotFound("Event not found".into()))?;

    state.participant_repo.find_by_event_and_user(&event_id, &user_id).await?
        .ok_or(AppError::Forbidden("Not a participant of this event".into()))?;

    Ok(Json(event))
}

pub async fn update_event(
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
    Path(event_id): Path<String>,
    Json(payload): Json<UpdateEventRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut event = state.event_repo.find_by_id(&event_id).await?
        .ok_or(AppError::NotFound("Event not found".into()))?;

    if event.owner_id != user_id {
        return Err(AppError::Forbidden("Only the event owner can update it".into()));
    }

    if let Some(title) = payload.title {
        if title.trim().is_empty() {
            return Err(AppError::Validation("Title must not be empty".into()));
        }
        event.title = title;
    }
    if let Some(description) = payload.description {
        event.description = description;
    }
    if payload.location.is_some() {
        event.location = payload.location;
    }
    if let Some(event_date) = payload.event_date {
        event.event_date = event_date;
    }
    if payload.budget_cents.is_some() {
        event.budget_cents = payload.budget_cents;
    }
    if payload.image_url.is_some() {
        event.image_url = payload.image_url;
    }

    let updated = state.event_repo.update(&event).await?;
    info!("Updated event {}", event_id);
    Ok(Json(updated))
}

pub async fn delete_event(
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
    Path(event_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let event = state.event_repo.find_by_id(&event_id).await?
        .ok_or(AppError::NotFound("Event not found".into()))?;

    if event.owner_id != user_id {
        return Err(AppError::Forbidden("Only the event owner can delete it".into()));
    }

    state.event_repo.delete(&event_id).await?;
    info!("Deleted event {}", event_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
