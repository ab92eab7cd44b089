use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::identity::UserId;
use crate::domain::models::event::EVENT_STATUS_ASSIGNED;
use crate::domain::models::participant::ROLE_OWNER;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn list_participants(
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
    Path(event_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.participant_repo.find_by_event_and_user(&event_id, &user_id).await?
        .ok_or(AppError::Forbidden("Not a participant of this event".into()))?;

    let participants = state.participant_repo.list_by_event(&event_id).await?;
    Ok(Json(participants))
}

pub async fn remove_participant(
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
    Path((event_id, target_user_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let event = state.event_repo.find_by_id(&event_id).await?
        .ok_or(AppError::NotFound("Event not found".into()))?;

    if user_id != target_user_id && event.owner_id != user_id {
        return Err(AppError::Forbidden("Only the event owner can remove others".into()));
    }
    if event.status == EVENT_STATUS_ASSIGNED {
        return Err(AppError::Conflict("Assignments have already been drawn".into()));
    }

    let target = state.participant_repo.find_by_event_and_user(&event_id, &target_user_id).await?
        .ok_or(AppError::NotFound("Participant not found".into()))?;

    if target.role == ROLE_OWNER {
        return Err(AppError::Validation("The event owner cannot leave their own event".into()));
    }

    state.participant_repo.delete(&event_id, &target_user_id).await?;
    info!("Removed participant {} from event {}", target_user_id, event_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
