use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::identity::UserId;
use crate::api::dtos::requests::CreateInvitationRequest;
use crate::domain::models::event::EVENT_STATUS_ASSIGNED;
use crate::domain::models::invitation::{
    Invitation, INVITATION_ACCEPTED, INVITATION_DECLINED, INVITATION_PENDING,
};
use crate::domain::models::job::{Job, JOB_INVITATION};
use crate::domain::models::participant::{Participant, ROLE_MEMBER};
use crate::error::AppError;
use std::sync::Arc;
use chrono::Utc;
use tracing::info;

pub async fn create_invitation(
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
    Path(event_id): Path<String>,
    Json(payload): Json<CreateInvitationRequest>,
) -> Result<impl IntoResponse, AppError> {
    let event = state.event_repo.find_by_id(&event_id).await?
        .ok_or(AppError::NotFound("Event not found".into()))?;

    if event.owner_id != user_id {
        return Err(AppError::Forbidden("Only the event owner can invite".into()));
    }
    if event.status == EVENT_STATUS_ASSIGNED {
        return Err(AppError::Conflict("Assignments have already been drawn".into()));
    }

    let invitation = Invitation::new(event_id.clone(), user_id, payload.email);
    let created = state.invitation_repo.create(&invitation).await?;

    if created.email.is_some() {
        let job = Job::new(JOB_INVITATION, event_id.clone(), created.id.clone(), Utc::now());
        state.job_repo.create(&job).await?;
    }

    info!("Created invitation {} for event {}", created.id, event_id);
    Ok(Json(created))
}

pub async fn list_invitations(
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
    Path(event_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let event = state.event_repo.find_by_id(&event_id).await?
        .ok_or(AppError::NotFound("Event not found".into()))?;

    if event.owner_id != user_id {
        return Err(AppError::Forbidden("Only the event owner can list invitations".into()));
    }

    let invitations = state.invitation_repo.list_by_event(&event_id).await?;
    Ok(Json(invitations))
}

/// Public lookup backing the invitation accept screen.
pub async fn get_invitation_by_token(
    State(state): State<Arc<AppState>>,
    Path(token): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let invitation = state.invitation_repo.find_by_token(&token).await?
        .ok_or(AppError::NotFound("Invitation not found".into()))?;
    let event = state.event_repo.find_by_id(&invitation.event_id).await?
        .ok_or(AppError::NotFound("Event not found".into()))?;

    Ok(Json(serde_json::json!({
        "invitation": invitation,
        "event": event,
    })))
}

pub async fn accept_invitation(
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
    Path(token): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let mut invitation = state.invitation_repo.find_by_token(&token).await?
        .ok_or(AppError::NotFound("Invitation not found".into()))?;

    if invitation.status != INVITATION_PENDING {
        return Err(AppError::Conflict("Invitation has already been answered".into()));
    }

    let event = state.event_repo.find_by_id(&invitation.event_id).await?
        .ok_or(AppError::NotFound("Event not found".into()))?;

    if event.status == EVENT_STATUS_ASSIGNED {
        return Err(AppError::Conflict("Assignments have already been drawn".into()));
    }

    if state.participant_repo.find_by_event_and_user(&event.id, &user_id).await?.is_some() {
        return Err(AppError::Conflict("Already participating in this event".into()));
    }

    let participant = Participant::new(event.id.clone(), user_id, ROLE_MEMBER);
    let created = state.participant_repo.create(&participant).await?;

    invitation.status = INVITATION_ACCEPTED.to_string();
    state.invitation_repo.update(&invitation).await?;

    info!("Invitation {} accepted, participant {} joined event {}", invitation.id, created.user_id, event.id);
    Ok(Json(created))
}

pub async fn decline_invitation(
    State(state): State<Arc<AppState>>,
    Path(token): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let mut invitation = state.invitation_repo.find_by_token(&token).await?
        .ok_or(AppError::NotFound("Invitation not found".into()))?;

    if invitation.status != INVITATION_PENDING {
        return Err(AppError::Conflict("Invitation has already been answered".into()));
    }

    invitation.status = INVITATION_DECLINED.to_string();
    let updated = state.invitation_repo.update(&invitation).await?;

    info!("Invitation {} declined", invitation.id);
    Ok(Json(updated))
}

pub async fn delete_invitation(
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
    Path((event_id, invitation_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let invitation = state.invitation_repo.find_by_id(&invitation_id).await?
        .filter(|i| i.event_id == event_id)
        .ok_or(AppError::NotFound("Invitation not found".into()))?;
    let event = state.event_repo.find_by_id(&invitation.event_id).await?
        .ok_or(AppError::NotFound("Event not found".into()))?;

    if event.owner_id != user_id {
        return Err(AppError::Forbidden("Only the event owner can revoke invitations".into()));
    }

    state.invitation_repo.delete(&invitation_id).await?;
    info!("Revoked invitation {}", invitation_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
