use crate::domain::{models::connection::OtaConnection, ports::OtaConnectionRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteConnectionRepo {
    pool: SqlitePool,
}

impl SqliteConnectionRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OtaConnectionRepository for SqliteConnectionRepo {
    async fn list(&self) -> Result<Vec<OtaConnection>, AppError> {
        sqlx::query_as::<_, OtaConnection>("SELECT * FROM ota_connections ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<OtaConnection>, AppError> {
        sqlx::query_as::<_, OtaConnection>("SELECT * FROM ota_connections WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, connection: &OtaConnection) -> Result<OtaConnection, AppError> {
        sqlx::query_as::<_, OtaConnection>(
            "UPDATE ota_connections SET name=?, key=?, is_visible=?, status=?, last_validated=?, category=?, markup_type=?, markup_value=?, is_stopped=?
             WHERE id=?
             RETURNING *",
        )
        .bind(&connection.name)
        .bind(&connection.key)
        .bind(connection.is_visible)
        .bind(&connection.status)
        .bind(&connection.last_validated)
        .bind(&connection.category)
        .bind(&connection.markup_type)
        .bind(connection.markup_value)
        .bind(connection.is_stopped)
        .bind(&connection.id)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)
    }
}
