use pms_backend::{
    api::router::create_router,
    config::Config,
    domain::ports::{DocumentService, ImagePart, PaymentGateway, VisionService},
    domain::services::{guest_registry::GuestRegistry, notifier::Notifier},
    error::AppError,
    infra::repositories::{
        sqlite_booking_repo::SqliteBookingRepo, sqlite_connection_repo::SqliteConnectionRepo,
        sqlite_guest_repo::SqliteGuestRepo, sqlite_hotel_repo::SqliteHotelRepo,
        sqlite_notification_repo::SqliteNotificationRepo,
        sqlite_rate_rules_repo::SqliteRateRulesRepo, sqlite_room_type_repo::SqliteRoomTypeRepo,
        sqlite_settings_repo::SqliteSettingsRepo,
    },
    state::AppState,
};
use async_trait::async_trait;
use axum::Router;
use pms_backend::domain::models::{booking::Booking, settings::PropertySettings};
use serde_json::{Value, json};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

pub struct MockVisionService;

#[async_trait]
impl VisionService for MockVisionService {
    async fn extract_json(
        &self,
        _api_key: &str,
        _prompt: &str,
        _image: Option<&ImagePart>,
    ) -> Result<Value, AppError> {
        Ok(json!({ "name": "Scanned Guest", "idNumber": "MOCK-1234" }))
    }
}

pub struct MockPaymentGateway;

#[async_trait]
impl PaymentGateway for MockPaymentGateway {
    async fn create_order(
        &self,
        _key_id: &str,
        _key_secret: &str,
        _amount_minor: i64,
        _receipt: &str,
    ) -> Result<String, AppError> {
        Ok("order_mock_0001".to_string())
    }
}

pub struct MockDocumentService;

#[async_trait]
impl DocumentService for MockDocumentService {
    async fn generate_invoice(
        &self,
        _booking: &Booking,
        _settings: &PropertySettings,
        invoice_number: &str,
    ) -> Result<String, AppError> {
        Ok(format!("documents/{}.pdf", invoice_number))
    }

    async fn generate_receipt(
        &self,
        _booking: &Booking,
        _settings: &PropertySettings,
        invoice_number: &str,
    ) -> Result<String, AppError> {
        Ok(format!("documents/{}-receipt.pdf", invoice_number))
    }
}

#[allow(dead_code)]
pub struct FailingDocumentService;

#[async_trait]
impl DocumentService for FailingDocumentService {
    async fn generate_invoice(
        &self,
        _booking: &Booking,
        _settings: &PropertySettings,
        _invoice_number: &str,
    ) -> Result<String, AppError> {
        Err(AppError::Upstream("PDF renderer unavailable".to_string()))
    }

    async fn generate_receipt(
        &self,
        _booking: &Booking,
        _settings: &PropertySettings,
        _invoice_number: &str,
    ) -> Result<String, AppError> {
        Err(AppError::Upstream("PDF renderer unavailable".to_string()))
    }
}

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::build(Arc::new(MockDocumentService)).await
    }

    #[allow(dead_code)]
    pub async fn with_failing_documents() -> Self {
        Self::build(Arc::new(FailingDocumentService)).await
    }

    async fn build(document_service: Arc<dyn DocumentService>) -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            document_dir: "./documents".to_string(),
            ai_api_key: Some("test-key".to_string()),
        };

        let guest_repo = Arc::new(SqliteGuestRepo::new(pool.clone()));
        let notification_repo = Arc::new(SqliteNotificationRepo::new(pool.clone()));

        let state = Arc::new(AppState {
            config,
            hotel_repo: Arc::new(SqliteHotelRepo::new(pool.clone())),
            room_type_repo: Arc::new(SqliteRoomTypeRepo::new(pool.clone())),
            booking_repo: Arc::new(SqliteBookingRepo::new(pool.clone())),
            guest_repo: guest_repo.clone(),
            settings_repo: Arc::new(SqliteSettingsRepo::new(pool.clone())),
            connection_repo: Arc::new(SqliteConnectionRepo::new(pool.clone())),
            rate_rules_repo: Arc::new(SqliteRateRulesRepo::new(pool.clone())),
            notification_repo: notification_repo.clone(),
            vision_service: Arc::new(MockVisionService),
            payment_gateway: Arc::new(MockPaymentGateway),
            document_service,
            guest_registry: Arc::new(GuestRegistry::new(guest_repo)),
            notifier: Arc::new(Notifier::new(notification_repo)),
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}
