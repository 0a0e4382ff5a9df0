use chrono::NaiveDate;
use serde::Deserialize;
use std::fs;

/// One analysis query: a coin and an inclusive UTC date range.
#[derive(Debug, Deserialize)]
pub struct QueryConfig {
    pub coin_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub chat_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub vs_currency: String,
    pub queries: Vec<QueryConfig>,
    pub telegram: Option<TelegramConfig>,
}

pub fn load_config(path: &str) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}
