//! Daily schedule fetching from the public stats service.

use crate::error::AppError;
use crate::fetcher::models::GameDayMap;
use crate::fetcher::processors::parse_daily_schedule;
use tracing::{info, instrument};

use super::client::execute;
use super::urls::schedule_url;

/// Fetches and parses the schedule for `date` into per-team game-day status.
///
/// The schedule service is public, so no credential is attached; the
/// orchestrator starts this before any credential work.
#[instrument(skip(http, schedule_base_url))]
pub async fn fetch_daily_schedule(
    http: &reqwest::Client,
    schedule_base_url: &str,
    date: &str,
) -> Result<GameDayMap, AppError> {
    let url = schedule_url(schedule_base_url, date);
    info!("Fetching daily schedule from {url}");
    let doc = execute(http.get(&url), &url).await?;
    parse_daily_schedule(&doc)
}
