use crate::domain::models::notification::Notification;
use crate::domain::ports::NotificationRepository;
use std::sync::Arc;
use tracing::warn;

/// Fire-and-forget notification emitter. Notifications are a side effect of
/// booking mutations and are written after the primary mutation commits; a
/// failure here is logged and swallowed, never surfaced to the caller.
pub struct Notifier {
    repo: Arc<dyn NotificationRepository>,
}

impl Notifier {
    pub fn new(repo: Arc<dyn NotificationRepository>) -> Self {
        Self { repo }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn emit(
        &self,
        notif_type: &str,
        category: &str,
        title: &str,
        message: &str,
        priority: &str,
        booking_id: Option<String>,
        room_number: Option<String>,
        metadata: Option<serde_json::Value>,
    ) -> Option<String> {
        let notification = Notification::new(
            notif_type,
            category,
            title,
            message,
            priority,
            booking_id,
            room_number,
            metadata,
        );

        match self.repo.create(&notification).await {
            Ok(created) => Some(created.id),
            Err(e) => {
                warn!("Failed to persist {} notification: {:?}", notif_type, e);
                None
            }
        }
    }
}
