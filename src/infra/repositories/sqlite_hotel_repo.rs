use crate::domain::{models::hotel::Hotel, ports::HotelRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};

pub struct SqliteHotelRepo {
    pool: SqlitePool,
}

impl SqliteHotelRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct HotelRow {
    id: String,
    name: String,
    location: String,
    color: String,
    ota_config: String,
}

impl From<HotelRow> for Hotel {
    fn from(row: HotelRow) -> Self {
        Hotel {
            id: row.id,
            name: row.name,
            location: row.location,
            color: row.color,
            ota_config: serde_json::from_str(&row.ota_config).unwrap_or_default(),
        }
    }
}

#[async_trait]
impl HotelRepository for SqliteHotelRepo {
    async fn create(&self, hotel: &Hotel) -> Result<Hotel, AppError> {
        let row = sqlx::query_as::<_, HotelRow>(
            "INSERT INTO hotels (id, name, location, color, ota_config) VALUES (?, ?, ?, ?, ?) RETURNING *",
        )
        .bind(&hotel.id)
        .bind(&hotel.name)
        .bind(&hotel.location)
        .bind(&hotel.color)
        .bind(serde_json::to_string(&hotel.ota_config).unwrap_or_else(|_| "{}".to_string()))
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;
        Ok(row.into())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Hotel>, AppError> {
        let row = sqlx::query_as::<_, HotelRow>("SELECT * FROM hotels WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(row.map(Into::into))
    }

    async fn list(&self) -> Result<Vec<Hotel>, AppError> {
        let rows = sqlx::query_as::<_, HotelRow>("SELECT * FROM hotels ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
