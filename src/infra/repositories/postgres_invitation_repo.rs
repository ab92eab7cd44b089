use crate::domain::{models::invitation::Invitation, ports::InvitationRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresInvitationRepo {
    pool: PgPool,
}

impl PostgresInvitationRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InvitationRepository for PostgresInvitationRepo {
    async fn create(&self, invitation: &Invitation) -> Result<Invitation, AppError> {
        sqlx::query_as::<_, Invitation>(
            "INSERT INTO invitations (id, event_id, invited_by, token, email, status, created_at) VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING id, event_id, invited_by, token, email, status, created_at",
        )
            .bind(&invitation.id)
            .bind(&invitation.event_id)
            .bind(&invitation.invited_by)
            .bind(&invitation.token)
            .bind(&invitation.email)
            .bind(&invitation.status)
            .bind(invitation.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Invitation>, AppError> {
        sqlx::query_as::<_, Invitation>(
            "SELECT id, event_id, invited_by, token, email, status, created_at FROM invitations WHERE id = $1",
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<Invitation>, AppError> {
        sqlx::query_as::<_, Invitation>(
            "SELECT id, event_id, invited_by, token, email, status, created_at FROM invitations WHERE token = $1",
        )
            .bind(token)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_event(&self, event_id: &str) -> Result<Vec<Invitation>, AppError> {
        sqlx::query_as::<_, Invitation>(
            "SELECT id, event_id, invited_by, token, email, status, created_at FROM invitations WHERE event_id = $1 ORDER BY created_at",
        )
            .bind(event_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, invitation: &Invitation) -> Result<Invitation, AppError> {
        sqlx::query_as::<_, Invitation>(
            "UPDATE invitations SET status=$1, email=$2 WHERE id=$3 RETURNING *",
        )
            .bind(&invitation.status)
            .bind(&invitation.email)
            .bind(&invitation.id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM invitations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Invitation not found".into()));
        }
        Ok(())
    }

    async fn delete_pending_by_event(&self, event_id: &str) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM invitations WHERE event_id = $1 AND status = 'PENDING'")
            .bind(event_id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(result.rows_affected())
    }
}
