use crate::domain::{models::participant::Participant, ports::ParticipantRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresParticipantRepo {
    pool: PgPool,
}

impl PostgresParticipantRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ParticipantRepository for PostgresParticipantRepo {
    async fn create(&self, participant: &Participant) -> Result<Participant, AppError> {
        sqlx::query_as::<_, Participant>(
            "INSERT INTO participants (id, event_id, user_id, role, joined_at) VALUES ($1, $2, $3, $4, $5) RETURNING id, event_id, user_id, role, joined_at",
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
            "SELECT id, event_id, user_id, role, joined_at FROM participants WHERE event_id = $1 AND user_id = $2",
        )
            .bind(event_id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_event(&self, event_id: &str) -> Result<Vec<Participant>, AppError> {
        sqlx::query_as::<_, Participant>(
            "SELECT id, event_id, user_id, role, joined_at FROM participants WHERE event_id = $1 ORDER BY joined_at",
        )
            .bind(event_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, event_id: &str, user_id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM participants WHERE event_id = $1 AND user_id = $2")
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
