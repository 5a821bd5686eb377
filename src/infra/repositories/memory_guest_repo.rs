use crate::domain::{models::guest::GuestProfile, ports::GuestProfileRepository};
use crate::error::AppError;
use crate::infra::repositories::memory_store::MemoryStore;
use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::Ordering;

pub struct MemoryGuestRepo {
    store: Arc<MemoryStore>,
}

impl MemoryGuestRepo {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

fn latest_first(a: &GuestProfile, b: &GuestProfile) -> std::cmp::Ordering {
    b.last_check_in.cmp(&a.last_check_in)
}

#[async_trait]
impl GuestProfileRepository for MemoryGuestRepo {
    async fn create(&self, profile: &GuestProfile) -> Result<GuestProfile, AppError> {
        let mut created = profile.clone();
        created.id = self.store.next_guest_id.fetch_add(1, Ordering::SeqCst);
        self.store.guest_profiles.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<GuestProfile>, AppError> {
        Ok(self.store.guest_profiles.lock().unwrap().iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_name_phone(&self, name: &str, phone: &str) -> Result<Option<GuestProfile>, AppError> {
        let profiles = self.store.guest_profiles.lock().unwrap();
        let mut matches: Vec<&GuestProfile> = profiles
            .iter()
            .filter(|p| p.name == name && p.phone_number == phone)
            .collect();
        matches.sort_by(|a, b| latest_first(a, b));
        Ok(matches.first().map(|p| (*p).clone()))
    }

    async fn find_latest_by_phone(&self, phone: &str) -> Result<Option<GuestProfile>, AppError> {
        let profiles = self.store.guest_profiles.lock().unwrap();
        let mut matches: Vec<&GuestProfile> = profiles.iter().filter(|p| p.phone_number == phone).collect();
        matches.sort_by(|a, b| latest_first(a, b));
        Ok(matches.first().map(|p| (*p).clone()))
    }

    async fn search_by_name(&self, query: &str) -> Result<Vec<GuestProfile>, AppError> {
        let needle = query.to_lowercase();
        let mut matches: Vec<GuestProfile> = self
            .store
            .guest_profiles
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        matches.sort_by(latest_first);
        Ok(matches)
    }

    async fn list(&self) -> Result<Vec<GuestProfile>, AppError> {
        let mut all = self.store.guest_profiles.lock().unwrap().clone();
        all.sort_by(latest_first);
        Ok(all)
    }

    async fn update(&self, profile: &GuestProfile) -> Result<GuestProfile, AppError> {
        let mut profiles = self.store.guest_profiles.lock().unwrap();
        let slot = profiles
            .iter_mut()
            .find(|p| p.id == profile.id)
            .ok_or_else(|| AppError::NotFound("Guest profile not found".into()))?;
        *slot = profile.clone();
        Ok(profile.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut profiles = self.store.guest_profiles.lock().unwrap();
        let before = profiles.len();
        profiles.retain(|p| p.id != id);
        if profiles.len() == before {
            return Err(AppError::NotFound("Guest profile not found".into()));
        }
        Ok(())
    }
}
