use crate::domain::{models::settings::PropertySettings, ports::SettingsRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};

pub struct SqliteSettingsRepo {
    pool: SqlitePool,
}

impl SqliteSettingsRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct SettingsRow {
    id: String,
    name: String,
    address: String,
    phone: Option<String>,
    email: Option<String>,
    gst_number: Option<String>,
    gst_rate: f64,
    checkin_time: String,
    checkout_time: String,
    timezone: String,
    razorpay_key_id: Option<String>,
    razorpay_key_secret: Option<String>,
    invoice_seq: i64,
    loyalty_tiers: String,
}

impl From<SettingsRow> for PropertySettings {
    fn from(row: SettingsRow) -> Self {
        PropertySettings {
            id: row.id,
            name: row.name,
            address: row.address,
            phone: row.phone,
            email: row.email,
            gst_number: row.gst_number,
            gst_rate: row.gst_rate,
            checkin_time: row.checkin_time,
            checkout_time: row.checkout_time,
            timezone: row.timezone,
            razorpay_key_id: row.razorpay_key_id,
            razorpay_key_secret: row.razorpay_key_secret,
            invoice_seq: row.invoice_seq,
            loyalty_tiers: serde_json::from_str(&row.loyalty_tiers).unwrap_or_default(),
        }
    }
}

#[async_trait]
impl SettingsRepository for SqliteSettingsRepo {
    async fn get(&self) -> Result<Option<PropertySettings>, AppError> {
        let row = sqlx::query_as::<_, SettingsRow>("SELECT * FROM property_settings WHERE id = 'default'")
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(row.map(Into::into))
    }

    async fn update(&self, settings: &PropertySettings) -> Result<PropertySettings, AppError> {
        let row = sqlx::query_as::<_, SettingsRow>(
            "UPDATE property_settings SET name=?, address=?, phone=?, email=?, gst_number=?, gst_rate=?, checkin_time=?, checkout_time=?, timezone=?, razorpay_key_id=?, razorpay_key_secret=?, invoice_seq=?, loyalty_tiers=?
             WHERE id = 'default'
             RETURNING *",
        )
        .bind(&settings.name)
        .bind(&settings.address)
        .bind(&settings.phone)
        .bind(&settings.email)
        .bind(&settings.gst_number)
        .bind(settings.gst_rate)
        .bind(&settings.checkin_time)
        .bind(&settings.checkout_time)
        .bind(&settings.timezone)
        .bind(&settings.razorpay_key_id)
        .bind(&settings.razorpay_key_secret)
        .bind(settings.invoice_seq)
        .bind(serde_json::to_string(&settings.loyalty_tiers).unwrap_or_else(|_| "[]".to_string()))
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;
        Ok(row.into())
    }
}
