use axum::{
    body::Body,
    extract::Request,
    routing::{get, post, put, delete},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{health, user, event, invitation, participant, wish, assignment};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Users
        .route("/api/v1/users", post(user::register_user))
        .route("/api/v1/me", get(user::get_me))

        // Events
        .route("/api/v1/events", post(event::create_event).get(event::list_events))
        .route("/api/v1/events/{event_id}", get(event::get_event).put(event::update_event).delete(event::delete_event))

        // Invitations
        .route("/api/v1/events/{event_id}/invitations", post(invitation::create_invitation).get(invitation::list_invitations))
        .route("/api/v1/invitations/{token}", get(invitation::get_invitation_by_token))
        .route("/api/v1/invitations/{token}/accept", post(invitation::accept_invitation))
        .route("/api/v1/invitations/{token}/decline", post(invitation::decline_invitation))
        .route("/api/v1/events/{event_id}/invitations/{invitation_id}", delete(invitation::delete_invitation))

        // Participants
        .route("/api/v1/events/{event_id}/participants", get(participant::list_participants))
        .route("/api/v1/events/{event_id}/participants/{user_id}", delete(participant::remove_participant))

        // Wishes
        .route("/api/v1/events/{event_id}/wishes", post(wish::create_wish).get(wish::list_wishes))
        .route("/api/v1/wishes/{wish_id}", put(wish::update_wish).delete(wish::delete_wish))
        .route("/api/v1/wishes/{wish_id}/claim", post(wish::claim_wish))
        .route("/api/v1/wishes/{wish_id}/unclaim", post(wish::unclaim_wish))

        // Giftee draw
        .route("/api/v1/events/{event_id}/assignments/randomize", post(assignment::randomize_assignments))
        .route("/api/v1/events/{event_id}/assignments", get(assignment::list_assignments))
        .route("/api/v1/events/{event_id}/assignments/me", get(assignment::get_my_giftee))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        user_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
