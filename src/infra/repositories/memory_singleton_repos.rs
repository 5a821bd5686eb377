use crate::domain::models::{
    connection::OtaConnection, notification::Notification, rate_rules::RateRulesConfig,
    settings::PropertySettings,
};
use crate::domain::ports::{
    NotificationRepository, OtaConnectionRepository, RateRulesRepository, SettingsRepository,
};
use crate::error::AppError;
use crate::infra::repositories::memory_store::MemoryStore;
use async_trait::async_trait;
use std::sync::Arc;

pub struct MemorySettingsRepo {
    store: Arc<MemoryStore>,
}

impl MemorySettingsRepo {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SettingsRepository for MemorySettingsRepo {
    async fn get(&self) -> Result<Option<PropertySettings>, AppError> {
        Ok(self.store.settings.lock().unwrap().clone())
    }

    async fn update(&self, settings: &PropertySettings) -> Result<PropertySettings, AppError> {
        *self.store.settings.lock().unwrap() = Some(settings.clone());
        Ok(settings.clone())
    }
}

pub struct MemoryConnectionRepo {
    store: Arc<MemoryStore>,
}

impl MemoryConnectionRepo {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl OtaConnectionRepository for MemoryConnectionRepo {
    async fn list(&self) -> Result<Vec<OtaConnection>, AppError> {
        let mut all = self.store.connections.lock().unwrap().clone();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<OtaConnection>, AppError> {
        Ok(self.store.connections.lock().unwrap().iter().find(|c| c.id == id).cloned())
    }

    async fn update(&self, connection: &OtaConnection) -> Result<OtaConnection, AppError> {
        let mut connections = self.store.connections.lock().unwrap();
        let slot = connections
            .iter_mut()
            .find(|c| c.id == connection.id)
            .ok_or_else(|| AppError::NotFound("Connection not found".into()))?;
        *slot = connection.clone();
        Ok(connection.clone())
    }
}

pub struct MemoryRateRulesRepo {
    store: Arc<MemoryStore>,
}

impl MemoryRateRulesRepo {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl RateRulesRepository for MemoryRateRulesRepo {
    async fn get(&self) -> Result<Option<RateRulesConfig>, AppError> {
        Ok(self.store.rate_rules.lock().unwrap().clone())
    }

    async fn update(&self, rules: &RateRulesConfig) -> Result<RateRulesConfig, AppError> {
        *self.store.rate_rules.lock().unwrap() = Some(rules.clone());
        Ok(rules.clone())
    }
}

pub struct MemoryNotificationRepo {
    store: Arc<MemoryStore>,
}

impl MemoryNotificationRepo {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl NotificationRepository for MemoryNotificationRepo {
    async fn create(&self, notification: &Notification) -> Result<Notification, AppError> {
        self.store.notifications.lock().unwrap().push(notification.clone());
        Ok(notification.clone())
    }

    async fn list(&self, unread_only: bool) -> Result<Vec<Notification>, AppError> {
        let mut all: Vec<Notification> = self
            .store
            .notifications
            .lock()
            .unwrap()
            .iter()
            .filter(|n| !n.is_dismissed && (!unread_only || !n.is_read))
            .cloned()
            .collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn mark_read(&self, id: &str) -> Result<(), AppError> {
        let mut notifications = self.store.notifications.lock().unwrap();
        let slot = notifications
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| AppError::NotFound("Notification not found".into()))?;
        slot.is_read = true;
        Ok(())
    }

    async fn mark_all_read(&self) -> Result<u64, AppError> {
        let mut notifications = self.store.notifications.lock().unwrap();
        let mut updated = 0;
        for n in notifications.iter_mut().filter(|n| !n.is_read) {
            n.is_read = true;
            updated += 1;
        }
        Ok(updated)
    }

    async fn dismiss(&self, id: &str) -> Result<(), AppError> {
        let mut notifications = self.store.notifications.lock().unwrap();
        let slot = notifications
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| AppError::NotFound("Notification not found".into()))?;
        slot.is_dismissed = true;
        Ok(())
    }
}
