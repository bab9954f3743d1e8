//! Fantasy Hockey Lineup Optimizer Library
//!
//! This library fetches a fantasy team's roster, player statistics, league
//! settings and the day's game schedule, merges them into canonical
//! per-player records, and computes score-optimized lineups under per-slot
//! capacity constraints.
//!
//! # Examples
//!
//! ```rust,no_run
//! use benchboss::auth::Credential;
//! use benchboss::config::Config;
//! use benchboss::error::AppError;
//! use benchboss::fetcher::api::{PlatformClient, create_http_client_with_timeout, fetch_roster_report};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let credential = Credential::load("credential.json").await?;
//!
//!     let http = create_http_client_with_timeout(config.http_timeout_seconds)?;
//!     let client = PlatformClient::with_http(http.clone(), &config.api_base_url);
//!
//!     let report = fetch_roster_report(
//!         &client,
//!         &http,
//!         &config,
//!         credential,
//!         "nhl.l.12345.t.3",
//!         Some("2026-01-15".to_string()),
//!     )
//!     .await?;
//!
//!     println!("{}", serde_json::to_string_pretty(&report)?);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod fetcher;
pub mod logging;
pub mod optimizer;

// Re-export commonly used types for convenience
pub use auth::Credential;
pub use config::Config;
pub use error::AppError;
pub use fetcher::api::{FantasyApi, PlatformClient, fetch_roster_report};
pub use fetcher::models::{PlayerRecord, RankingCriterion, RosterReport, SimplePlayer};
pub use optimizer::{Lineup, SlotPolicy, StandardSlotPolicy, optimize_lineup_by_attribute};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
