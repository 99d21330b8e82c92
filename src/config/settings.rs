//! Application settings management
//! 
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};
use crate::models::CourseModule;
use crate::utils::errors::Result;

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub bot: BotConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub course: CourseConfig,
}

/// Telegram bot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BotConfig {
    pub token: String,
    /// Chat that receives contact requests
    pub admin_id: i64,
    #[serde(default = "default_support_contact")]
    pub support_contact: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    #[serde(default)]
    pub json: bool,
    /// Directory for daily rolling log files; stdout only when unset
    #[serde(default)]
    pub file_dir: Option<String>,
}

/// Course content configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CourseConfig {
    pub modules: Vec<CourseModule>,
}

fn default_support_contact() -> String {
    "@first025".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file_dir: None,
        }
    }
}

impl Default for CourseConfig {
    fn default() -> Self {
        Self {
            modules: crate::content::default_modules(),
        }
    }
}

impl Settings {
    /// Load settings from configuration file and environment variables
    ///
    /// Sources in increasing priority: `config.toml`, `COURSEBUDDY__*`
    /// variables, then the flat `BOT_TOKEN` / `ADMIN_ID` pair (also read
    /// from `.env`).
    pub fn new() -> Result<Self> {
        dotenv::dotenv().ok();

        let admin_id = std::env::var("ADMIN_ID")
            .ok()
            .map(|raw| raw.trim().parse::<i64>())
            .transpose()
            .map_err(|e| crate::utils::errors::CourseBuddyError::Config(
                format!("ADMIN_ID must be a numeric chat id: {}", e)
            ))?;

        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("COURSEBUDDY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("bot.token", std::env::var("BOT_TOKEN").ok())?
            .set_override_option("bot.admin_id", admin_id)?
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<()> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bot: BotConfig {
                token: String::new(),
                admin_id: 0,
                support_contact: default_support_contact(),
            },
            logging: LoggingConfig::default(),
            course: CourseConfig::default(),
        }
    }
}
