use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub document_dir: String,
    pub ai_api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "memory".to_string()),
            port: env::var("PORT").unwrap_or_else(|_| "8000".to_string()).parse().expect("PORT must be a number"),
            document_dir: env::var("DOCUMENT_DIR").unwrap_or_else(|_| "./documents".to_string()),
            ai_api_key: env::var("GEMINI_API_KEY").ok(),
        }
    }
}
