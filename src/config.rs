use anyhow::{Result, anyhow};
use chrono::{FixedOffset, Local, Offset};
use std::env;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    /// Offset used to decide which calendar day a timestamp falls on.
    /// `None` means the machine's local offset.
    pub utc_offset_minutes: Option<i32>,
    pub environment: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        Self::from_env_only()
    }

    /// Load configuration from environment variables only (without loading .env files)
    /// This is useful for testing where you want to control the environment directly
    pub fn from_env_only() -> Result<Self> {
        Ok(Config {
            api_base_url: env::var("API_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
            utc_offset_minutes: env::var("DASHBOARD_UTC_OFFSET_MINUTES")
                .ok()
                .and_then(|minutes| minutes.parse().ok()),
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    pub fn utc_offset(&self) -> Result<FixedOffset> {
        match self.utc_offset_minutes {
            Some(minutes) => FixedOffset::east_opt(minutes * 60)
                .ok_or_else(|| anyhow!("UTC offset out of range: {} minutes", minutes)),
            None => Ok(Local::now().offset().fix()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            utc_offset_minutes: None,
            environment: "development".to_string(),
        }
    }
}
