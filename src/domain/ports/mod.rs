use crate::domain::models::{
    user::User, event::Event, participant::Participant, invitation::Invitation,
    wish::Wish, assignment::Assignment, job::Job,
};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &User) -> Result<User, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
}

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn create(&self, event: &Event) -> Result<Event, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Event>, AppError>;
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Event>, AppError>;
    async fn update(&self, event: &Event) -> Result<Event, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait ParticipantRepository: Send + Sync {
    async fn create(&self, participant: &Participant) -> Result<Participant, AppError>;
    async fn find_by_event_and_user(&self, event_id: &str, user_id: &str) -> Result<Option<Participant>, AppError>;
    async fn list_by_event(&self, event_id: &str) -> Result<Vec<Participant>, AppError>;
    async fn delete(&self, event_id: &str, user_id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait InvitationRepository: Send + Sync {
    async fn create(&self, invitation: &Invitation) -> Result<Invitation, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Invitation>, AppError>;
    async fn find_by_token(&self, token: &str) -> Result<Option<Invitation>, AppError>;
    async fn list_by_event(&self, event_id: &str) -> Result<Vec<Invitation>, AppError>;
    async fn update(&self, invitation: &Invitation) -> Result<Invitation, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
    async fn delete_pending_by_event(&self, event_id: &str) -> Result<u64, AppError>;
}

#[async_trait]
pub trait WishRepository: Send + Sync {
    async fn create(&self, wish: &Wish) -> Result<Wish, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Wish>, AppError>;
    async fn list_by_event(&self, event_id: &str) -> Result<Vec<Wish>, AppError>;
    async fn update(&self, wish: &Wish) -> Result<Wish, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait AssignmentRepository: Send + Sync {
    /// Replaces the event's draw atomically: existing rows are deleted and
    /// the new ones inserted in a single transaction, so a concurrent
    /// reader never sees a partial draw.
    async fn replace_for_event(&self, event_id: &str, assignments: &[Assignment]) -> Result<Vec<Assignment>, AppError>;
    async fn list_by_event(&self, event_id: &str) -> Result<Vec<Assignment>, AppError>;
    async fn find_by_giver(&self, event_id: &str, giver_id: &str) -> Result<Option<Assignment>, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Assignment>, AppError>;
}

#[async_trait]
pub trait JobRepository: Send + Sync {
    async fn create(&self, job: &Job) -> Result<Job, AppError>;
    async fn find_pending(&self, limit: i32) -> Result<Vec<Job>, AppError>;
    async fn update_status(&self, id: &str, status: &str, error_message: Option<String>) -> Result<(), AppError>;
}

#[async_trait]
pub trait EmailService: Send + Sync {
    async fn send(&self, recipient: &str, subject: &str, html_body: &str) -> Result<(), AppError>;
}
