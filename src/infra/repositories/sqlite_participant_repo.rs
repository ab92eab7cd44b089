use crate::domain::{models::participant::Participant, ports::ParticipantRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteParticipantRepo {
    pool: SqlitePool,
}

impl SqliteParticipantRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ParticipantRepository for SqliteParticipantRepo {
    async fn create(&self, participant: &Participant) -> Result<Participant, AppError> {
        sqlx::query_as::<_, Participant>(
            "INSERT INTO participants (id, event_id, user_id, role, joined_at) VALUES (?, ?, ?, ?, ?) RETURNING id, event_id, user_id, role, joined_at",
        )
            .bind(&participant.id)
            .bind(&participant.event_id)
            .bind(&participant.user_id)
            .bind(&participant.role)
            .bind(participant.joined_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_event_and_user(&self, event_id: &str, user_id: &str) -> Result<Option<Participant>, AppError> {
        sqlx::query_as::<_, Participant>(
            "SELECT id, event_id, user_id, role, joined_at FROM participants WHERE event_id = ? AND user_id = ?",
        )
            .bind(event_id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_event(&self, event_id: &str) -> Result<Vec<Participant>, AppError> {
        sqlx::query_as::<_, Participant>(
            "SELECT id, event_id, user_id, role, joined_at FROM participants WHERE event_id = ? ORDER BY joined_at",
        )
            .bind(event_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, event_id: &str, user_id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM participants WHERE event_id = ? AND user_id = ?")
            .bind(event_id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Participant not found".into()));
        }
        Ok(())
    }
}
