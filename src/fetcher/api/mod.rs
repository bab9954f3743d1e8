pub mod batch;
pub mod client;
pub mod http_client;
pub mod orchestrator;
pub mod schedule_api;
pub mod urls;

pub use client::{FantasyApi, PlatformClient};
pub use http_client::create_http_client_with_timeout;
pub use orchestrator::fetch_roster_report;
