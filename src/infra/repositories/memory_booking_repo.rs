use crate::domain::{models::booking::Booking, ports::BookingRepository};
use crate::error::AppError;
use crate::infra::repositories::memory_store::MemoryStore;
use async_trait::async_trait;
use std::sync::Arc;

pub struct MemoryBookingRepo {
    store: Arc<MemoryStore>,
}

impl MemoryBookingRepo {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl BookingRepository for MemoryBookingRepo {
    async fn create(&self, booking: &Booking) -> Result<Booking, AppError> {
        let mut bookings = self.store.bookings.lock().unwrap();
        if bookings.iter().any(|b| b.id == booking.id) {
            return Err(AppError::Conflict("Resource already exists (duplicate entry)".into()));
        }
        bookings.push(booking.clone());
        Ok(booking.clone())
    }

    async fn create_many(&self, new_bookings: &[Booking]) -> Result<Vec<Booking>, AppError> {
        let mut bookings = self.store.bookings.lock().unwrap();
        for booking in new_bookings {
            if bookings.iter().any(|b| b.id == booking.id) {
                return Err(AppError::Conflict("Resource already exists (duplicate entry)".into()));
            }
        }
        bookings.extend(new_bookings.iter().cloned());
        Ok(new_bookings.to_vec())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, AppError> {
        let bookings = self.store.bookings.lock().unwrap();
        Ok(bookings.iter().find(|b| b.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Booking>, AppError> {
        let mut all: Vec<Booking> = self.store.bookings.lock().unwrap().clone();
        all.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(all)
    }

    async fn list_active_by_room(&self, room_number: &str) -> Result<Vec<Booking>, AppError> {
        let bookings = self.store.bookings.lock().unwrap();
        Ok(bookings
            .iter()
            .filter(|b| b.room_number.as_deref() == Some(room_number) && b.status.is_active())
            .cloned()
            .collect())
    }

    async fn list_by_room_type(&self, room_type_id: &str) -> Result<Vec<Booking>, AppError> {
        let bookings = self.store.bookings.lock().unwrap();
        Ok(bookings.iter().filter(|b| b.room_type_id == room_type_id).cloned().collect())
    }

    async fn update(&self, booking: &Booking) -> Result<Booking, AppError> {
        let mut bookings = self.store.bookings.lock().unwrap();
        let slot = bookings
            .iter_mut()
            .find(|b| b.id == booking.id)
            .ok_or_else(|| AppError::NotFound("Booking not found".into()))?;
        *slot = booking.clone();
        Ok(booking.clone())
    }

    async fn settle(&self, booking: &Booking) -> Result<Booking, AppError> {
        let mut bookings = self.store.bookings.lock().unwrap();
        let slot = bookings
            .iter_mut()
            .find(|b| b.id == booking.id)
            .ok_or_else(|| AppError::NotFound("Booking not found".into()))?;
        *slot = booking.clone();
        if let Some(settings) = self.store.settings.lock().unwrap().as_mut() {
            settings.invoice_seq += 1;
        }
        Ok(booking.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let mut bookings = self.store.bookings.lock().unwrap();
        let before = bookings.len();
        bookings.retain(|b| b.id != id);
        if bookings.len() == before {
            return Err(AppError::NotFound("Booking not found".into()));
        }
        Ok(())
    }
}
