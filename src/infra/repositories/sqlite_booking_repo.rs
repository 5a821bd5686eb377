use crate::domain::{
    models::booking::{Booking, BookingSource, BookingStatus},
    ports::BookingRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::{FromRow, Sqlite, SqlitePool};

pub struct SqliteBookingRepo {
    pool: SqlitePool,
}

impl SqliteBookingRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Raw row shape: nested structures live in TEXT columns as JSON.
#[derive(FromRow)]
struct BookingRow {
    id: String,
    room_type_id: String,
    room_number: Option<String>,
    guest_name: String,
    source: String,
    status: String,
    timestamp: i64,
    check_in: String,
    check_out: String,
    amount: Option<f64>,
    reservation_id: Option<String>,
    channel_sync: String,
    rejection_reason: Option<String>,
    guest_details: Option<String>,
    number_of_rooms: Option<i32>,
    pax: Option<i32>,
    accessory_guests: String,
    extra_beds: Option<i32>,
    special_requests: Option<String>,
    is_vip: bool,
    is_settled: bool,
    folio: String,
    payments: String,
    invoice_number: Option<String>,
    invoice_date: Option<String>,
}

impl From<BookingRow> for Booking {
    fn from(row: BookingRow) -> Self {
        Booking {
            id: row.id,
            room_type_id: row.room_type_id,
            room_number: row.room_number,
            guest_name: row.guest_name,
            // unrecognized channel strings fold into Direct
            source: BookingSource::parse(&row.source).unwrap_or(BookingSource::Direct),
            status: BookingStatus::parse(&row.status).unwrap_or(BookingStatus::Confirmed),
            timestamp: row.timestamp,
            check_in: row.check_in,
            check_out: row.check_out,
            amount: row.amount,
            reservation_id: row.reservation_id,
            channel_sync: serde_json::from_str(&row.channel_sync).unwrap_or_default(),
            rejection_reason: row.rejection_reason,
            guest_details: row.guest_details.and_then(|s| serde_json::from_str(&s).ok()),
            number_of_rooms: row.number_of_rooms,
            pax: row.pax,
            accessory_guests: serde_json::from_str(&row.accessory_guests).unwrap_or_default(),
            extra_beds: row.extra_beds,
            special_requests: row.special_requests,
            is_vip: row.is_vip,
            is_settled: row.is_settled,
            folio: serde_json::from_str(&row.folio).unwrap_or_default(),
            payments: serde_json::from_str(&row.payments).unwrap_or_default(),
            invoice_number: row.invoice_number,
            invoice_date: row.invoice_date,
        }
    }
}

fn json_text<T: serde::Serialize>(value: &T, fallback: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| fallback.to_string())
}

const INSERT_SQL: &str = "INSERT INTO bookings (id, room_type_id, room_number, guest_name, source, status, timestamp, check_in, check_out, amount, reservation_id, channel_sync, rejection_reason, guest_details, number_of_rooms, pax, accessory_guests, extra_beds, special_requests, is_vip, is_settled, folio, payments, invoice_number, invoice_date)
     VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
     RETURNING *";

const UPDATE_SQL: &str = "UPDATE bookings SET room_type_id=?, room_number=?, guest_name=?, source=?, status=?, check_in=?, check_out=?, amount=?, reservation_id=?, channel_sync=?, rejection_reason=?, guest_details=?, number_of_rooms=?, pax=?, accessory_guests=?, extra_beds=?, special_requests=?, is_vip=?, is_settled=?, folio=?, payments=?, invoice_number=?, invoice_date=?
     WHERE id=?
     RETURNING *";

async fn insert_booking<'e, E>(executor: E, booking: &Booking) -> Result<BookingRow, sqlx::Error>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    sqlx::query_as::<_, BookingRow>(INSERT_SQL)
        .bind(&booking.id)
        .bind(&booking.room_type_id)
        .bind(&booking.room_number)
        .bind(&booking.guest_name)
        .bind(booking.source.as_str())
        .bind(booking.status.as_str())
        .bind(booking.timestamp)
        .bind(&booking.check_in)
        .bind(&booking.check_out)
        .bind(booking.amount)
        .bind(&booking.reservation_id)
        .bind(json_text(&booking.channel_sync, "{}"))
        .bind(&booking.rejection_reason)
        .bind(booking.guest_details.as_ref().map(|g| json_text(g, "{}")))
        .bind(booking.number_of_rooms)
        .bind(booking.pax)
        .bind(json_text(&booking.accessory_guests, "[]"))
        .bind(booking.extra_beds)
        .bind(&booking.special_requests)
        .bind(booking.is_vip)
        .bind(booking.is_settled)
        .bind(json_text(&booking.folio, "[]"))
        .bind(json_text(&booking.payments, "[]"))
        .bind(&booking.invoice_number)
        .bind(&booking.invoice_date)
        .fetch_one(executor)
        .await
}

async fn update_booking<'e, E>(executor: E, booking: &Booking) -> Result<BookingRow, sqlx::Error>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    sqlx::query_as::<_, BookingRow>(UPDATE_SQL)
        .bind(&booking.room_type_id)
        .bind(&booking.room_number)
        .bind(&booking.guest_name)
        .bind(booking.source.as_str())
        .bind(booking.status.as_str())
        .bind(&booking.check_in)
        .bind(&booking.check_out)
        .bind(booking.amount)
        .bind(&booking.reservation_id)
        .bind(json_text(&booking.channel_sync, "{}"))
        .bind(&booking.rejection_reason)
        .bind(booking.guest_details.as_ref().map(|g| json_text(g, "{}")))
        .bind(booking.number_of_rooms)
        .bind(booking.pax)
        .bind(json_text(&booking.accessory_guests, "[]"))
        .bind(booking.extra_beds)
        .bind(&booking.special_requests)
        .bind(booking.is_vip)
        .bind(booking.is_settled)
        .bind(json_text(&booking.folio, "[]"))
        .bind(json_text(&booking.payments, "[]"))
        .bind(&booking.invoice_number)
        .bind(&booking.invoice_date)
        .bind(&booking.id)
        .fetch_one(executor)
        .await
}

#[async_trait]
impl BookingRepository for SqliteBookingRepo {
    async fn create(&self, booking: &Booking) -> Result<Booking, AppError> {
        let row = insert_booking(&self.pool, booking).await.map_err(AppError::Database)?;
        Ok(row.into())
    }

    async fn create_many(&self, bookings: &[Booking]) -> Result<Vec<Booking>, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;
        let mut created = Vec::with_capacity(bookings.len());
        for booking in bookings {
            let row = insert_booking(&mut *tx, booking).await.map_err(AppError::Database)?;
            created.push(row.into());
        }
        tx.commit().await.map_err(AppError::Database)?;
        Ok(created)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, AppError> {
        let row = sqlx::query_as::<_, BookingRow>("SELECT * FROM bookings WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(row.map(Into::into))
    }

    async fn list(&self) -> Result<Vec<Booking>, AppError> {
        let rows = sqlx::query_as::<_, BookingRow>("SELECT * FROM bookings ORDER BY timestamp DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_active_by_room(&self, room_number: &str) -> Result<Vec<Booking>, AppError> {
        let rows = sqlx::query_as::<_, BookingRow>(
            "SELECT * FROM bookings WHERE room_number = ? AND status IN ('Confirmed', 'CheckedIn')",
        )
        .bind(room_number)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_by_room_type(&self, room_type_id: &str) -> Result<Vec<Booking>, AppError> {
        let rows = sqlx::query_as::<_, BookingRow>("SELECT * FROM bookings WHERE room_type_id = ?")
            .bind(room_type_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update(&self, booking: &Booking) -> Result<Booking, AppError> {
        let row = update_booking(&self.pool, booking).await.map_err(AppError::Database)?;
        Ok(row.into())
    }

    async fn settle(&self, booking: &Booking) -> Result<Booking, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;
        let row = update_booking(&mut *tx, booking).await.map_err(AppError::Database)?;
        sqlx::query("UPDATE property_settings SET invoice_seq = invoice_seq + 1 WHERE id = 'default'")
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;
        tx.commit().await.map_err(AppError::Database)?;
        Ok(row.into())
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Booking not found".into()));
        }
        Ok(())
    }
}
