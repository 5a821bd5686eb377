use crate::domain::{models::rate_rules::RateRulesConfig, ports::RateRulesRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};

pub struct SqliteRateRulesRepo {
    pool: SqlitePool,
}

impl SqliteRateRulesRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct RateRulesRow {
    weekly_rules: String,
    special_events: String,
}

impl RateRulesRow {
    fn into_config(self) -> Option<RateRulesConfig> {
        Some(RateRulesConfig {
            weekly_rules: serde_json::from_str(&self.weekly_rules).ok()?,
            special_events: serde_json::from_str(&self.special_events).unwrap_or_default(),
        })
    }
}

#[async_trait]
impl RateRulesRepository for SqliteRateRulesRepo {
    async fn get(&self) -> Result<Option<RateRulesConfig>, AppError> {
        let row = sqlx::query_as::<_, RateRulesRow>(
            "SELECT weekly_rules, special_events FROM rate_rules WHERE id = 'default'",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?;
        Ok(row.and_then(RateRulesRow::into_config))
    }

    async fn update(&self, rules: &RateRulesConfig) -> Result<RateRulesConfig, AppError> {
        sqlx::query(
            "INSERT INTO rate_rules (id, weekly_rules, special_events) VALUES ('default', ?, ?)
             ON CONFLICT(id) DO UPDATE SET weekly_rules = excluded.weekly_rules, special_events = excluded.special_events",
        )
        .bind(serde_json::to_string(&rules.weekly_rules).unwrap_or_else(|_| "{}".to_string()))
        .bind(serde_json::to_string(&rules.special_events).unwrap_or_else(|_| "[]".to_string()))
        .execute(&self.pool)
        .await
        .map_err(AppError::Database)?;
        Ok(rules.clone())
    }
}
