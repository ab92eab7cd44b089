use crate::domain::{models::wish::Wish, ports::WishRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresWishRepo {
    pool: PgPool,
}

impl PostgresWishRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WishRepository for PostgresWishRepo {
    async fn create(&self, wish: &Wish) -> Result<Wish, AppError> {
        sqlx::query_as::<_, Wish>(
            "INSERT INTO wishes (id, event_id, user_id, title, description, url, price_cents, image_url, claimed_by, created_at) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) RETURNING *",
        )
            .bind(&wish.id)
            .bind(&wish.event_id)
            .bind(&wish.user_id)
            .bind(&wish.title)
            .bind(&wish.description)
            .bind(&wish.url)
            .bind(wish.price_cents)
            .bind(&wish.image_url)
            .bind(&wish.claimed_by)
            .bind(wish.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Wish>, AppError> {
        sqlx::query_as::<_, Wish>(
            "SELECT * FROM wishes WHERE id = $1",
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_event(&self, event_id: &str) -> Result<Vec<Wish>, AppError> {
        sqlx::query_as::<_, Wish>(
            "SELECT * FROM wishes WHERE event_id = $1 ORDER BY created_at",
        )
            .bind(event_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, wish: &Wish) -> Result<Wish, AppError> {
        sqlx::query_as::<_, Wish>(
            "UPDATE wishes SET title=$1, description=$2, url=$3, price_cents=$4, image_url=$5, claimed_by=$6 WHERE id=$7 RETURNING *",
        )
            .bind(&wish.title)
            .bind(&wish.description)
            .bind(&wish.url)
            .bind(wish.price_cents)
            .bind(&wish.image_url)
            .bind(&wish.claimed_by)
            .bind(&wish.id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM wishes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Wish not found".into()));
        }
        Ok(())
    }
}
