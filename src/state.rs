use std::sync::Arc;
use crate::domain::ports::{
    UserRepository, EventRepository, ParticipantRepository, InvitationRepository,
    WishRepository, AssignmentRepository, JobRepository, EmailService,
};
use crate::config::Config;
use tera::Tera;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub user_repo: Arc<dyn UserRepository>,
    pub event_repo: Arc<dyn EventRepository>,
    pub participant_repo: Arc<dyn ParticipantRepository>,
    pub invitation_repo: Arc<dyn InvitationRepository>,
    pub wish_repo: Arc<dyn WishRepository>,
    pub assignment_repo: Arc<dyn AssignmentRepository>,
    pub job_repo: Arc<dyn JobRepository>,
    pub email_service: Arc<dyn EmailService>,
    pub templates: Arc<Tera>,
}
