use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Base URL of the fantasy platform API. Should include https:// prefix.
    pub api_base_url: String,
    /// Base URL of the public daily schedule service (queried without a credential).
    pub schedule_base_url: String,
    /// OAuth token endpoint used to refresh an expiring credential.
    pub token_url: String,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for API requests. Defaults to 30 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    /// UTC offset (hours) of the reference time zone for the default-date rule.
    #[serde(default = "default_reference_utc_offset")]
    pub reference_utc_offset_hours: i32,
}

/// Default HTTP timeout in seconds
fn default_http_timeout() -> u64 {
    crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

fn default_reference_utc_offset() -> i32 {
    crate::constants::DEFAULT_REFERENCE_UTC_OFFSET_HOURS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: String::new(),
            schedule_base_url: String::new(),
            token_url: String::new(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
            reference_utc_offset_hours: default_reference_utc_offset(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// Environment variables can override config file values; a config file is
    /// not required when all remote endpoints are provided via the environment.
    ///
    /// # Environment Variables
    /// - `BENCHBOSS_API_BASE_URL` - Override fantasy platform API base URL
    /// - `BENCHBOSS_SCHEDULE_BASE_URL` - Override schedule service base URL
    /// - `BENCHBOSS_TOKEN_URL` - Override token endpoint URL
    /// - `BENCHBOSS_LOG_FILE` - Override log file path
    /// - `BENCHBOSS_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded configuration
    /// * `Err(AppError)` - No usable configuration or validation failure
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            let content = fs::read_to_string(&config_path).await?;
            toml::from_str(&content)?
        } else {
            Config::default()
        };

        // Override with environment variables if present
        if let Ok(api_base_url) = std::env::var(crate::constants::env_vars::API_BASE_URL) {
            config.api_base_url = api_base_url;
        }

        if let Ok(schedule_base_url) = std::env::var(crate::constants::env_vars::SCHEDULE_BASE_URL)
        {
            config.schedule_base_url = schedule_base_url;
        }

        if let Ok(token_url) = std::env::var(crate::constants::env_vars::TOKEN_URL) {
            config.token_url = token_url;
        }

        if let Ok(log_file_path) = std::env::var(crate::constants::env_vars::LOG_FILE) {
            config.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(crate::constants::env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            config.http_timeout_seconds = timeout;
        }

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Validates the configuration settings
    ///
    /// # Returns
    /// * `Ok(())` - Configuration is valid
    /// * `Err(AppError)` - Configuration validation failed
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(
            &self.api_base_url,
            &self.schedule_base_url,
            &self.token_url,
            &self.log_file_path,
        )
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    ///
    /// # Notes
    /// - Shows config file location and current settings
    /// - Handles case when no config file exists
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if Path::new(&config_path).exists() {
            let config = Config::load().await?;
            println!("\nCurrent Configuration");
            println!("────────────────────────────────────");
            println!("Config Location:");
            println!("{config_path}");
            println!("────────────────────────────────────");
            println!("Fantasy API Base URL:");
            println!("{}", config.api_base_url);
            println!("────────────────────────────────────");
            println!("Schedule Service Base URL:");
            println!("{}", config.schedule_base_url);
            println!("────────────────────────────────────");
            println!("Token Endpoint:");
            println!("{}", config.token_url);
            println!("────────────────────────────────────");
            println!("HTTP Timeout:");
            println!("{} seconds", config.http_timeout_seconds);
            println!("────────────────────────────────────");
            println!("Log File Location:");
            if let Some(custom_path) = &config.log_file_path {
                println!("{custom_path}");
            } else {
                println!("{log_dir}/benchboss.log");
                println!("(Default location)");
            }
        } else {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist and ensures the
    /// remote URLs carry an https:// prefix.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(&Config {
            api_base_url: ensure_https_prefix(&self.api_base_url),
            schedule_base_url: ensure_https_prefix(&self.schedule_base_url),
            token_url: ensure_https_prefix(&self.token_url),
            log_file_path: self.log_file_path.clone(),
            http_timeout_seconds: self.http_timeout_seconds,
            reference_utc_offset_hours: self.reference_utc_offset_hours,
        })?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path (for testing).
    #[allow(dead_code)] // Used in tests
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

fn ensure_https_prefix(url: &str) -> String {
    if url.is_empty() || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{}", url.trim_start_matches("http://"))
    }
}
