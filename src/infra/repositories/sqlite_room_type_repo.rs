use crate::domain::{models::room_type::RoomType, ports::RoomTypeRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};

pub struct SqliteRoomTypeRepo {
    pool: SqlitePool,
}

impl SqliteRoomTypeRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct RoomTypeRow {
    id: String,
    name: String,
    total_capacity: i32,
    base_price: f64,
    floor_price: f64,
    ceiling_price: f64,
    base_occupancy: i32,
    amenities: String,
    room_numbers: String,
    extra_bed_charge: Option<f64>,
}

impl From<RoomTypeRow> for RoomType {
    fn from(row: RoomTypeRow) -> Self {
        RoomType {
            id: row.id,
            name: row.name,
            total_capacity: row.total_capacity,
            base_price: row.base_price,
            floor_price: row.floor_price,
            ceiling_price: row.ceiling_price,
            base_occupancy: row.base_occupancy,
            amenities: serde_json::from_str(&row.amenities).unwrap_or_default(),
            room_numbers: serde_json::from_str(&row.room_numbers).unwrap_or_default(),
            extra_bed_charge: row.extra_bed_charge,
        }
    }
}

#[async_trait]
impl RoomTypeRepository for SqliteRoomTypeRepo {
    async fn create(&self, room_type: &RoomType) -> Result<RoomType, AppError> {
        let row = sqlx::query_as::<_, RoomTypeRow>(
            "INSERT INTO room_types (id, name, total_capacity, base_price, floor_price, ceiling_price, base_occupancy, amenities, room_numbers, extra_bed_charge)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *",
        )
        .bind(&room_type.id)
        .bind(&room_type.name)
        .bind(room_type.total_capacity)
        .bind(room_type.base_price)
        .bind(room_type.floor_price)
        .bind(room_type.ceiling_price)
        .bind(room_type.base_occupancy)
        .bind(serde_json::to_string(&room_type.amenities).unwrap_or_else(|_| "[]".to_string()))
        .bind(serde_json::to_string(&room_type.room_numbers).unwrap_or_else(|_| "[]".to_string()))
        .bind(room_type.extra_bed_charge)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;
        Ok(row.into())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<RoomType>, AppError> {
        let row = sqlx::query_as::<_, RoomTypeRow>("SELECT * FROM room_types WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(row.map(Into::into))
    }

    async fn list(&self) -> Result<Vec<RoomType>, AppError> {
        let rows = sqlx::query_as::<_, RoomTypeRow>("SELECT * FROM room_types ORDER BY base_price DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update(&self, room_type: &RoomType) -> Result<RoomType, AppError> {
        let row = sqlx::query_as::<_, RoomTypeRow>(
            "UPDATE room_types SET name=?, total_capacity=?, base_price=?, floor_price=?, ceiling_price=?, base_occupancy=?, amenities=?, room_numbers=?, extra_bed_charge=?
             WHERE id=?
             RETURNING *",
        )
        .bind(&room_type.name)
        .bind(room_type.total_capacity)
        .bind(room_type.base_price)
        .bind(room_type.floor_price)
        .bind(room_type.ceiling_price)
        .bind(room_type.base_occupancy)
        .bind(serde_json::to_string(&room_type.amenities).unwrap_or_else(|_| "[]".to_string()))
        .bind(serde_json::to_string(&room_type.room_numbers).unwrap_or_else(|_| "[]".to_string()))
        .bind(room_type.extra_bed_charge)
        .bind(&room_type.id)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;
        Ok(row.into())
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM room_types WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Room type not found".into()));
        }
        Ok(())
    }
}
