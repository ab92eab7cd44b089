use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::identity::UserId;
use crate::api::dtos::requests::{CreateWishRequest, UpdateWishRequest};
use crate::domain::models::wish::{NewWishParams, Wish};
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn create_wish(
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
    Path(event_id): Path<String>,
    Json(payload): Json<CreateWishRequest>,
) -> Result<impl IntoResponse, AppError> {
    state.participant_repo.find_by_event_and_user(&event_id, &user_id).await?
        .ok_or(AppError::Forbidden("Not a participant of this event".into()))?;

    if payload.title.trim().is_empty() {
        return Err(AppError::Validation("Title must not be empty".into()));
    }

    let wish = Wish::new(NewWishParams {
        event_id: event_id.clone(),
        user_id,
        title: payload.title,
        description: payload.description,
        url: payload.url,
        price_cents: payload.price_cents,
        image_url: payload.image_url,
    });
    let created = state.wish_repo.create(&wish).await?;

    info!("Created wish {} in event {}", created.id, event_id);
    Ok(Json(created))
}

pub async fn list_wishes(
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
    Path(event_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.participant_repo.find_by_event_and_user(&event_id, &user_id).await?
        .ok_or(AppError::Forbidden("Not a participant of this event".into()))?;

    let wishes: Vec<Wish> = state.wish_repo.list_by_event(&event_id).await?
        .into_iter()
        .map(|w| w.redacted_for(&user_id))
        .collect();

    Ok(Json(wishes))
}

pub async fn update_wish(
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
    Path(wish_id): Path<String>,
    Json(payload): Json<UpdateWishRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut wish = state.wish_repo.find_by_id(&wish_id).await?
        .ok_or(AppError::NotFound("Wish not found".into()))?;

    if wish.user_id != user_id {
        return Err(AppError::Forbidden("Only the wisher can edit a wish".into()));
    }

    if let Some(title) = payload.title {
        if title.trim().is_empty() {
            return Err(AppError::Validation("Title must not be empty".into()));
        }
        wish.title = title;
    }
    if payload.description.is_some() {
        wish.description = payload.description;
    }
    if payload.url.is_some() {
        wish.url = payload.url;
    }
    if payload.price_cents.is_some() {
        wish.price_cents = payload.price_cents;
    }
    if payload.image_url.is_some() {
        wish.image_url = payload.image_url;
    }

    let updated = state.wish_repo.update(&wish).await?;
    info!("Updated wish {}", wish_id);
    Ok(Json(updated.redacted_for(&user_id)))
}

pub async fn delete_wish(
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
    Path(wish_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let wish = state.wish_repo.find_by_id(&wish_id).await?
        .ok_or(AppError::NotFound("Wish not found".into()))?;

    if wish.user_id != user_id {
        return Err(AppError::Forbidden("Only the wisher can delete a wish".into()));
    }

    state.wish_repo.delete(&wish_id).await?;
    info!("Deleted wish {}", wish_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}

pub async fn claim_wish(
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
    Path(wish_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let mut wish = state.wish_repo.find_by_id(&wish_id).await?
        .ok_or(AppError::NotFound("Wish not found".into()))?;

    state.participant_repo.find_by_event_and_user(&wish.event_id, &user_id).await?
        .ok_or(AppError::Forbidden("Not a participant of this event".into()))?;

    if wish.user_id == user_id {
        return Err(AppError::Forbidden("You cannot claim your own wish".into()));
    }
    if wish.claimed_by.is_some() {
        return Err(AppError::Conflict("Wish has already been claimed".into()));
    }

    wish.claimed_by = Some(user_id.clone());
    let updated = state.wish_repo.update(&wish).await?;

    info!("Wish {} claimed", wish_id);
    Ok(Json(updated))
}

pub async fn unclaim_wish(
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
    Path(wish_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let mut wish = state.wish_repo.find_by_id(&wish_id).await?
        .ok_or(AppError::NotFound("Wish not found".into()))?;

    if wish.claimed_by.as_deref() != Some(user_id.as_str()) {
        return Err(AppError::Forbidden("Only the claimer can release a wish".into()));
    }

    wish.claimed_by = None;
    let updated = state.wish_repo.update(&wish).await?;

    info!("Wish {} released", wish_id);
    Ok(Json(updated))
}
