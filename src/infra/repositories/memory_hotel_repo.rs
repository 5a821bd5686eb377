use crate::domain::{models::hotel::Hotel, ports::HotelRepository};
use crate::error::AppError;
use crate::infra::repositories::memory_store::MemoryStore;
use async_trait::async_trait;
use std::sync::Arc;

pub struct MemoryHotelRepo {
    store: Arc<MemoryStore>,
}

impl MemoryHotelRepo {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl HotelRepository for MemoryHotelRepo {
    async fn create(&self, hotel: &Hotel) -> Result<Hotel, AppError> {
        let mut hotels = self.store.hotels.lock().unwrap();
        if hotels.iter().any(|h| h.id == hotel.id) {
            return Err(AppError::Conflict("Resource already exists (duplicate entry)".into()));
        }
        hotels.push(hotel.clone());
        Ok(hotel.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Hotel>, AppError> {
        Ok(self.store.hotels.lock().unwrap().iter().find(|h| h.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Hotel>, AppError> {
        let mut all = self.store.hotels.lock().unwrap().clone();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }
}
