use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};
use crate::state::AppState;
use std::sync::Arc;

/// Caller identity as asserted by the authenticating gateway in front of
/// this service. The gateway terminates the actual login flow and forwards
/// the verified user id in `X-User-Id`.
pub struct UserId(pub String);

impl FromRequestParts<Arc<AppState>> for UserId {
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &Arc<AppState>) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get("x-user-id")
            .and_then(|v| v.to_str().ok())
            .ok_or(StatusCode::UNAUTHORIZED)?;

        match state.user_repo.find_by_id(user_id).await {
            Ok(Some(user)) => Ok(UserId(user.id)),
            Ok(None) => Err(StatusCode::UNAUTHORIZED),
            Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
        }
    }
}
