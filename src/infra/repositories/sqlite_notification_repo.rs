use crate::domain::{models::notification::Notification, ports::NotificationRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

pub struct SqliteNotificationRepo {
    pool: SqlitePool,
}

impl SqliteNotificationRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct NotificationRow {
    id: String,
    notif_type: String,
    category: String,
    title: String,
    message: String,
    priority: String,
    booking_id: Option<String>,
    room_number: Option<String>,
    metadata: Option<String>,
    is_read: bool,
    is_dismissed: bool,
    created_at: DateTime<Utc>,
}

impl From<NotificationRow> for Notification {
    fn from(row: NotificationRow) -> Self {
        Notification {
            id: row.id,
            notif_type: row.notif_type,
            category: row.category,
            title: row.title,
            message: row.message,
            priority: row.priority,
            booking_id: row.booking_id,
            room_number: row.room_number,
            metadata: row.metadata.and_then(|s| serde_json::from_str(&s).ok()),
            is_read: row.is_read,
            is_dismissed: row.is_dismissed,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl NotificationRepository for SqliteNotificationRepo {
    async fn create(&self, notification: &Notification) -> Result<Notification, AppError> {
        let row = sqlx::query_as::<_, NotificationRow>(
            "INSERT INTO notifications (id, notif_type, category, title, message, priority, booking_id, room_number, metadata, is_read, is_dismissed, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *",
        )
        .bind(&notification.id)
        .bind(&notification.notif_type)
        .bind(&notification.category)
        .bind(&notification.title)
        .bind(&notification.message)
        .bind(&notification.priority)
        .bind(&notification.booking_id)
        .bind(&notification.room_number)
        .bind(notification.metadata.as_ref().map(|m| m.to_string()))
        .bind(notification.is_read)
        .bind(notification.is_dismissed)
        .bind(notification.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;
        Ok(row.into())
    }

    async fn list(&self, unread_only: bool) -> Result<Vec<Notification>, AppError> {
        let sql = if unread_only {
            "SELECT * FROM notifications WHERE is_read = 0 AND is_dismissed = 0 ORDER BY created_at DESC"
        } else {
            "SELECT * FROM notifications WHERE is_dismissed = 0 ORDER BY created_at DESC"
        };
        let rows = sqlx::query_as::<_, NotificationRow>(sql)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn mark_read(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE notifications SET is_read = 1 WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Notification not found".into()));
        }
        Ok(())
    }

    async fn mark_all_read(&self) -> Result<u64, AppError> {
        let result = sqlx::query("UPDATE notifications SET is_read = 1 WHERE is_read = 0")
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(result.rows_affected())
    }

    async fn dismiss(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE notifications SET is_dismissed = 1 WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Notification not found".into()));
        }
        Ok(())
    }
}
