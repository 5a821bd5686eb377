use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{ConnectOptions, SqlitePool};
use tracing::info;
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::domain::services::{guest_registry::GuestRegistry, notifier::Notifier};
use crate::infra::ai::vision_service::GeminiVisionService;
use crate::infra::documents::pdf_service::PdfDocumentService;
use crate::infra::payments::razorpay_gateway::RazorpayGateway;
use crate::infra::repositories::{
    memory_booking_repo::MemoryBookingRepo, memory_guest_repo::MemoryGuestRepo,
    memory_hotel_repo::MemoryHotelRepo, memory_room_type_repo::MemoryRoomTypeRepo,
    memory_singleton_repos::{
        MemoryConnectionRepo, MemoryNotificationRepo, MemoryRateRulesRepo, MemorySettingsRepo,
    },
    memory_store::MemoryStore,
    sqlite_booking_repo::SqliteBookingRepo, sqlite_connection_repo::SqliteConnectionRepo,
    sqlite_guest_repo::SqliteGuestRepo, sqlite_hotel_repo::SqliteHotelRepo,
    sqlite_notification_repo::SqliteNotificationRepo, sqlite_rate_rules_repo::SqliteRateRulesRepo,
    sqlite_room_type_repo::SqliteRoomTypeRepo, sqlite_settings_repo::SqliteSettingsRepo,
};
use crate::state::AppState;

pub async fn bootstrap_state(config: &Config) -> AppState {
    let vision_service = Arc::new(GeminiVisionService::new());
    let payment_gateway = Arc::new(RazorpayGateway::new());
    let document_service = Arc::new(PdfDocumentService::new(config.document_dir.clone()));

    if config.database_url.starts_with("sqlite:") {
        info!("Initializing SQLite storage with WAL mode...");
        let pool = connect_sqlite(&config.database_url).await;
        run_sqlite_migrations(&pool).await;

        let guest_repo = Arc::new(SqliteGuestRepo::new(pool.clone()));
        let notification_repo = Arc::new(SqliteNotificationRepo::new(pool.clone()));

        AppState {
            config: config.clone(),
            hotel_repo: Arc::new(SqliteHotelRepo::new(pool.clone())),
            room_type_repo: Arc::new(SqliteRoomTypeRepo::new(pool.clone())),
            booking_repo: Arc::new(SqliteBookingRepo::new(pool.clone())),
            guest_repo: guest_repo.clone(),
            settings_repo: Arc::new(SqliteSettingsRepo::new(pool.clone())),
            connection_repo: Arc::new(SqliteConnectionRepo::new(pool.clone())),
            rate_rules_repo: Arc::new(SqliteRateRulesRepo::new(pool.clone())),
            notification_repo: notification_repo.clone(),
            vision_service,
            payment_gateway,
            document_service,
            guest_registry: Arc::new(GuestRegistry::new(guest_repo)),
            notifier: Arc::new(Notifier::new(notification_repo)),
        }
    } else {
        info!("No database URL configured, using in-memory storage");
        let store = Arc::new(MemoryStore::seeded());

        let guest_repo = Arc::new(MemoryGuestRepo::new(store.clone()));
        let notification_repo = Arc::new(MemoryNotificationRepo::new(store.clone()));

        AppState {
            config: config.clone(),
            hotel_repo: Arc::new(MemoryHotelRepo::new(store.clone())),
            room_type_repo: Arc::new(MemoryRoomTypeRepo::new(store.clone())),
            booking_repo: Arc::new(MemoryBookingRepo::new(store.clone())),
            guest_repo: guest_repo.clone(),
            settings_repo: Arc::new(MemorySettingsRepo::new(store.clone())),
            connection_repo: Arc::new(MemoryConnectionRepo::new(store.clone())),
            rate_rules_repo: Arc::new(MemoryRateRulesRepo::new(store.clone())),
            notification_repo: notification_repo.clone(),
            vision_service,
            payment_gateway,
            document_service,
            guest_registry: Arc::new(GuestRegistry::new(guest_repo)),
            notifier: Arc::new(Notifier::new(notification_repo)),
        }
    }
}

async fn connect_sqlite(database_url: &str) -> SqlitePool {
    let opts = SqliteConnectOptions::from_str(database_url)
        .expect("Invalid SQLite connection string")
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5))
        .log_statements(LevelFilter::Debug)
        .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(opts)
        .await
        .expect("Failed to connect to SQLite")
}

async fn run_sqlite_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}
