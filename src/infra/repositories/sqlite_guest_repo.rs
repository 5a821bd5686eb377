use crate::domain::{models::guest::GuestProfile, ports::GuestProfileRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteGuestRepo {
    pool: SqlitePool,
}

impl SqliteGuestRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GuestProfileRepository for SqliteGuestRepo {
    async fn create(&self, profile: &GuestProfile) -> Result<GuestProfile, AppError> {
        sqlx::query_as::<_, GuestProfile>(
            "INSERT INTO guest_profiles (name, phone_number, email, id_type, id_number, address, dob, nationality, preferences, last_check_in)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *",
        )
        .bind(&profile.name)
        .bind(&profile.phone_number)
        .bind(&profile.email)
        .bind(&profile.id_type)
        .bind(&profile.id_number)
        .bind(&profile.address)
        .bind(&profile.dob)
        .bind(&profile.nationality)
        .bind(&profile.preferences)
        .bind(&profile.last_check_in)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<GuestProfile>, AppError> {
        sqlx::query_as::<_, GuestProfile>("SELECT * FROM guest_profiles WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_name_phone(&self, name: &str, phone: &str) -> Result<Option<GuestProfile>, AppError> {
        sqlx::query_as::<_, GuestProfile>(
            "SELECT * FROM guest_profiles WHERE name = ? AND phone_number = ? ORDER BY last_check_in DESC LIMIT 1",
        )
        .bind(name)
        .bind(phone)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn find_latest_by_phone(&self, phone: &str) -> Result<Option<GuestProfile>, AppError> {
        sqlx::query_as::<_, GuestProfile>(
            "SELECT * FROM guest_profiles WHERE phone_number = ? ORDER BY last_check_in DESC LIMIT 1",
        )
        .bind(phone)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn search_by_name(&self, query: &str) -> Result<Vec<GuestProfile>, AppError> {
        // LIKE is case-insensitive for ASCII in SQLite
        sqlx::query_as::<_, GuestProfile>(
            "SELECT * FROM guest_profiles WHERE name LIKE ? ORDER BY last_check_in DESC",
        )
        .bind(format!("%{}%", query))
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<GuestProfile>, AppError> {
        sqlx::query_as::<_, GuestProfile>("SELECT * FROM guest_profiles ORDER BY last_check_in DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, profile: &GuestProfile) -> Result<GuestProfile, AppError> {
        sqlx::query_as::<_, GuestProfile>(
            "UPDATE guest_profiles SET name=?, phone_number=?, email=?, id_type=?, id_number=?, address=?, dob=?, nationality=?, preferences=?, last_check_in=?
             WHERE id=?
             RETURNING *",
        )
        .bind(&profile.name)
        .bind(&profile.phone_number)
        .bind(&profile.email)
        .bind(&profile.id_type)
        .bind(&profile.id_number)
        .bind(&profile.address)
        .bind(&profile.dob)
        .bind(&profile.nationality)
        .bind(&profile.preferences)
        .bind(&profile.last_check_in)
        .bind(profile.id)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM guest_profiles WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Guest profile not found".into()));
        }
        Ok(())
    }
}
