use crate::domain::{models::room_type::RoomType, ports::RoomTypeRepository};
use crate::error::AppError;
use crate::infra::repositories::memory_store::MemoryStore;
use async_trait::async_trait;
use std::sync::Arc;

pub struct MemoryRoomTypeRepo {
    store: Arc<MemoryStore>,
}

impl MemoryRoomTypeRepo {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl RoomTypeRepository for MemoryRoomTypeRepo {
    async fn create(&self, room_type: &RoomType) -> Result<RoomType, AppError> {
        let mut room_types = self.store.room_types.lock().unwrap();
        if room_types.iter().any(|rt| rt.id == room_type.id) {
            return Err(AppError::Conflict("Resource already exists (duplicate entry)".into()));
        }
        room_types.push(room_type.clone());
        Ok(room_type.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<RoomType>, AppError> {
        Ok(self.store.room_types.lock().unwrap().iter().find(|rt| rt.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<RoomType>, AppError> {
        let mut all = self.store.room_types.lock().unwrap().clone();
        all.sort_by(|a, b| b.base_price.total_cmp(&a.base_price));
        Ok(all)
    }

    async fn update(&self, room_type: &RoomType) -> Result<RoomType, AppError> {
        let mut room_types = self.store.room_types.lock().unwrap();
        let slot = room_types
            .iter_mut()
            .find(|rt| rt.id == room_type.id)
            .ok_or_else(|| AppError::NotFound("Room type not found".into()))?;
        *slot = room_type.clone();
        Ok(room_type.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let mut room_types = self.store.room_types.lock().unwrap();
        let before = room_types.len();
        room_types.retain(|rt| rt.id != id);
        if room_types.len() == before {
            return Err(AppError::NotFound("Room type not found".into()));
        }
        Ok(())
    }
}
