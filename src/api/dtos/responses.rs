use serde::Serialize;

use crate::domain::models::{assignment::Assignment, user::User};

#[derive(Serialize)]
pub struct AssignmentsResponse {
    pub event_id: String,
    pub assignments: Vec<Assignment>,
}

#[derive(Serialize)]
pub struct MyGifteeResponse {
    pub event_id: String,
    pub receiver: User,
}
