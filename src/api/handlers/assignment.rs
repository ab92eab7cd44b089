use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::identity::UserId;
use crate::api::dtos::responses::{AssignmentsResponse, MyGifteeResponse};
use crate::domain::models::assignment::Assignment;
use crate::domain::models::event::{EVENT_STATUS_ASSIGNED, EVENT_TYPE_ONE_TO_ONE};
use crate::domain::models::job::{Job, JOB_ASSIGNMENT};
use crate::domain::services::assignment::generate_assignments;
use crate::error::AppError;
use std::sync::Arc;
use chrono::Utc;
use tracing::info;

/// Draws giver→receiver pairs for a one-to-one event, replacing any
/// previous draw, and clears the invitations that are still unanswered.
pub async fn randomize_assignments(
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
    Path(event_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let mut event = state.event_repo.find_by_id(&event_id).await?
        .ok_or(AppError::NotFound("Event not found".into()))?;

    if event.owner_id != user_id {
        return Err(AppError::Forbidden("Only the event owner can draw assignments".into()));
    }
    if event.event_type != EVENT_TYPE_ONE_TO_ONE {
        return Err(AppError::Validation("Assignments can only be drawn for one-to-one events".into()));
    }

    let participants = state.participant_repo.list_by_event(&event_id).await?;
    let participant_ids: Vec<String> = participants.into_iter().map(|p| p.user_id).collect();

    let pairing = generate_assignments(&participant_ids)?;

    let rows: Vec<Assignment> = pairing
        .into_iter()
        .map(|(giver, receiver)| Assignment::new(event_id.clone(), giver, receiver))
        .collect();

    let stored = state.assignment_repo.replace_for_event(&event_id, &rows).await?;

    let cleared = state.invitation_repo.delete_pending_by_event(&event_id).await?;
    if cleared > 0 {
        info!("Cleared {} pending invitations for event {}", cleared, event_id);
    }

    if event.status != EVENT_STATUS_ASSIGNED {
        event.status = EVENT_STATUS_ASSIGNED.to_string();
        state.event_repo.update(&event).await?;
    }

    for assignment in &stored {
        let job = Job::new(JOB_ASSIGNMENT, event_id.clone(), assignment.id.clone(), Utc::now());
        state.job_repo.create(&job).await?;
    }

    info!("Drew {} assignments for event {}", stored.len(), event_id);
    Ok(Json(AssignmentsResponse {
        event_id,
        assignments: stored,
    }))
}

pub async fn list_assignments(
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
    Path(event_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let event = state.event_repo.find_by_id(&event_id).await?
        .ok_or(AppError::NotFound("Event not found".into()))?;

    // Members only ever see their own pair; the full mapping would spoil
    // the draw.
    if event.owner_id != user_id {
        return Err(AppError::Forbidden("Only the event owner can list all assignments".into()));
    }

    let assignments = state.assignment_repo.list_by_event(&event_id).await?;
    Ok(Json(AssignmentsResponse { event_id, assignments }))
}

pub async fn get_my_giftee(
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
    Path(event_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.participant_repo.find_by_event_and_user(&event_id, &user_id).await?
        .ok_or(AppError::Forbidden("Not a participant of this event".into()))?;

    let assignment = state.assignment_repo.find_by_giver(&event_id, &user_id).await?
        .ok_or(AppError::NotFound("No assignment drawn for this event yet".into()))?;

    let receiver = state.user_repo.find_by_id(&assignment.receiver_id).await?
        .ok_or(AppError::NotFound("Receiver not found".into()))?;

    Ok(Json(MyGifteeResponse { event_id, receiver }))
}
