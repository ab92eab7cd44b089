use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::identity::UserId;
use crate::api::dtos::requests::RegisterUserRequest;
use crate::domain::models::user::User;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn register_user(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.display_name.trim().is_empty() {
        return Err(AppError::Validation("Display name must not be empty".into()));
    }
    if !payload.email.contains('@') {
        return Err(AppError::Validation("Invalid email address".into()));
    }

    let user = User::new(payload.display_name, payload.email, payload.avatar_url);
    let created = state.user_repo.create(&user).await?;

    info!("Registered user {}", created.id);
    Ok(Json(created))
}

pub async fn get_me(
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
) -> Result<impl IntoResponse, AppError> {
    let user = state.user_repo.find_by_id(&user_id).await?
        .ok_or(AppError::NotFound("User not found".into()))?;
    Ok(Json(user))
}
