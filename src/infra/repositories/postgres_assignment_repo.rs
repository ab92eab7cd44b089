use crate::domain::{models::assignment::Assignment, ports::AssignmentRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresAssignmentRepo {
    pool: PgPool,
}

impl PostgresAssignmentRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AssignmentRepository for PostgresAssignmentRepo {
    async fn replace_for_event(&self, event_id: &str, assignments: &[Assignment]) -> Result<Vec<Assignment>, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        sqlx::query("DELETE FROM assignments WHERE event_id = $1")
            .bind(event_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        for assignment in assignments {
            sqlx::query(
                "INSERT INTO assignments (id, event_id, giver_id, receiver_id, created_at) VALUES ($1, $2, $3, $4, $5)",
            )
                .bind(&assignment.id)
                .bind(&assignment.event_id)
                .bind(&assignment.giver_id)
                .bind(&assignment.receiver_id)
                .bind(assignment.created_at)
                .execute(&mut *tx)
                .await
                .map_err(AppError::Database)?;
        }

        tx.commit().await.map_err(AppError::Database)?;
        Ok(assignments.to_vec())
    }

    async fn list_by_event(&self, event_id: &str) -> Result<Vec<Assignment>, AppError> {
        sqlx::query_as::<_, Assignment>(
            "SELECT id, event_id, giver_id, receiver_id, created_at FROM assignments WHERE event_id = $1",
        )
            .bind(event_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_giver(&self, event_id: &str, giver_id: &str) -> Result<Option<Assignment>, AppError> {
        sqlx::query_as::<_, Assignment>(
            "SELECT id, event_id, giver_id, receiver_id, created_at FROM assignments WHERE event_id = $1 AND giver_id = $2",
        )
            .bind(event_id)
            .bind(giver_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Assignment>, AppError> {
        sqlx::query_as::<_, Assignment>(
            "SELECT id, event_id, giver_id, receiver_id, created_at FROM assignments WHERE id = $1",
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
