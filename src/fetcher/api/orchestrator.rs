// src/fetcher/api/orchestrator.rs - Pipeline orchestration for one roster request

use crate::auth::{Credential, refresh_if_needed, verify_id_token};
use crate::config::Config;
use crate::error::AppError;
use crate::fetcher::models::{PlayerRecord, RankingCriterion, RosterReport};
use crate::fetcher::processors::{merge_player_records, parse_team_roster, resolve_settings};
use crate::optimizer::{StandardSlotPolicy, optimize_lineup_by_attribute};
use chrono::{FixedOffset, NaiveDate, Utc};
use std::collections::BTreeMap;
use tracing::{info, instrument};

use super::batch::fetch_player_stats_batched;
use super::client::FantasyApi;
use super::schedule_api::fetch_daily_schedule;
use super::urls::{
    game_key_from_team_key, game_settings_resource, league_key_from_team_key,
    league_settings_resource, roster_resource,
};

/// Resolves the pipeline date: an explicit `YYYY-MM-DD` date wins, otherwise
/// the current date in the configured reference time zone.
fn resolve_date(
    custom_date: Option<String>,
    reference_utc_offset_hours: i32,
) -> Result<String, AppError> {
    match custom_date {
        Some(date) => {
            NaiveDate::parse_from_str(&date, "%Y-%m-%d").map_err(|e| {
                AppError::datetime_parse_error(format!("invalid date '{date}': {e}"))
            })?;
            Ok(date)
        }
        None => {
            let offset = reference_utc_offset_hours
                .checked_mul(3600)
                .and_then(FixedOffset::east_opt)
                .ok_or_else(|| {
                    AppError::config_error(format!(
                        "invalid reference UTC offset: {reference_utc_offset_hours}"
                    ))
                })?;
            Ok(Utc::now().with_timezone(&offset).format("%Y-%m-%d").to_string())
        }
    }
}

/// Runs the roster pipeline for one team and date and assembles the report.
///
/// Sequencing: the credential-free schedule fetch is spawned first, then the
/// id token is verified while the credential refreshes; once the credential
/// is confirmed, the roster fetch (chaining into the batched stats queries)
/// and both settings fetches run concurrently and are joined with the
/// schedule. Any single failure fails the whole run with no partial result.
/// Outstanding sibling requests are not cancelled; their results are simply
/// discarded once the pipeline has failed.
///
/// # Arguments
/// * `client` - Platform query capability carrying the credentialed calls
/// * `http` - Plain HTTP client for the credential-free schedule service
/// * `config` - Remote endpoints and the reference time zone offset
/// * `credential` - Access/refresh/id token bundle, refreshed in place if near expiry
/// * `team_key` - Fantasy team key, e.g. `nhl.l.12345.t.3`
/// * `custom_date` - Optional date override in "YYYY-MM-DD" format
#[instrument(skip(client, http, config, credential, custom_date))]
pub async fn fetch_roster_report<C>(
    client: &C,
    http: &reqwest::Client,
    config: &Config,
    credential: Credential,
    team_key: &str,
    custom_date: Option<String>,
) -> Result<RosterReport, AppError>
where
    C: FantasyApi + Sync,
{
    info!("Starting roster pipeline for team {team_key}");

    let date = resolve_date(custom_date, config.reference_utc_offset_hours)?;
    let league_key = league_key_from_team_key(team_key)?;
    let game_key = game_key_from_team_key(team_key)?;
    info!("Resolved date {date}, league {league_key}, game {game_key}");

    // The schedule needs no credential: start it before the token work so it
    // overlaps the entire fetch phase.
    let schedule_task = tokio::spawn({
        let http = http.clone();
        let schedule_base_url = config.schedule_base_url.clone();
        let date = date.clone();
        async move { fetch_daily_schedule(&http, &schedule_base_url, &date).await }
    });

    // Prepare the credential: identity verification and refresh run together
    let (_, credential) = tokio::try_join!(
        async { verify_id_token(&credential.id_token) },
        refresh_if_needed(http, &config.token_url, credential.clone()),
    )?;
    info!("Credential verified");

    // Fetch phase: the roster chain and both settings documents run
    // concurrently under the confirmed credential
    let roster_chain = async {
        let roster_doc = client
            .query(&roster_resource(team_key, &date), &credential)
            .await?;
        let roster = parse_team_roster(&roster_doc)?;
        info!("Roster contains {} players", roster.len());
        let batch_docs =
            fetch_player_stats_batched(client, &credential, roster.player_keys()).await?;
        Ok::<_, AppError>((roster, batch_docs))
    };

    let game_settings_res = game_settings_resource(&game_key);
    let league_settings_res = league_settings_resource(&league_key);
    let ((roster, batch_docs), game_doc, league_doc) = tokio::try_join!(
        roster_chain,
        client.query(&game_settings_res, &credential),
        client.query(&league_settings_res, &credential),
    )?;

    let schedule = schedule_task
        .await
        .map_err(|e| AppError::TaskJoin(e.to_string()))??;
    info!("All fetch branches joined");

    // League settings amend the game-level categories, so the two parses
    // are sequenced inside resolve_settings
    let (stat_id_map, position_capacities) = resolve_settings(&game_doc, &league_doc)?;

    let players = merge_player_records(&roster, &batch_docs, &stat_id_map, &schedule)?;
    info!("Merged {} player records", players.len());

    // One optimization run per ranking criterion
    let policy = StandardSlotPolicy;
    let mut optimized_lineups = BTreeMap::new();
    for criterion in RankingCriterion::ALL {
        let lineup =
            optimize_lineup_by_attribute(&players, criterion, &position_capacities, &policy);
        info!(
            "Optimized lineup for {criterion}: {} starters, {} bench",
            lineup.starters().count(),
            lineup.bench().count()
        );
        optimized_lineups.insert(criterion.to_string(), lineup.to_simple_players());
    }

    let original_lineup = players.iter().map(PlayerRecord::to_simple).collect();
    let player_info_map = players
        .into_iter()
        .map(|player| (player.player_key.clone(), player))
        .collect();

    info!("Roster pipeline completed for team {team_key}");
    Ok(RosterReport {
        player_info_map,
        original_lineup,
        optimized_lineups,
        stat_id_map,
    })
}
