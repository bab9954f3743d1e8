//! Pure document parsers: raw platform documents in, canonical structures out.
//!
//! Parse failures log a truncated preview of the offending document so the
//! server-side log carries the diagnostics the uniform user-facing failure
//! omits.

use crate::error::AppError;
use crate::fetcher::models::{
    GameDayMap, RosterDocument, RosterEntry, ScheduleDocument, ScheduleEntry, StatsDocument,
    TeamRoster,
};
use serde_json::Value;
use tracing::error;

/// Truncated document preview for log output
pub(super) fn preview(doc: &Value) -> String {
    doc.to_string().chars().take(200).collect()
}

/// Parses a roster document into roster membership keyed by PlayerKey,
/// preserving document order.
///
/// Players without an explicit eligible-position list are treated as
/// eligible for their current position only. Duplicate player keys within
/// one document are rejected.
pub fn parse_team_roster(doc: &Value) -> Result<TeamRoster, AppError> {
    let parsed: RosterDocument = serde_json::from_value(doc.clone()).map_err(|e| {
        error!(
            "Roster document rejected: {} (document preview: {})",
            e,
            preview(doc)
        );
        AppError::document_parse("roster", e.to_string())
    })?;

    let mut roster = TeamRoster::default();
    for player in parsed.team.players {
        let eligible_positions = if player.eligible_positions.is_empty() {
            vec![player.current_position.clone()]
        } else {
            player.eligible_positions
        };
        let entry = RosterEntry {
            name: player.name,
            current_position: player.current_position,
            eligible_positions,
            moved: player.moved,
        };
        if !roster.insert(player.player_key.clone(), entry) {
            return Err(AppError::document_parse(
                "roster",
                format!("duplicate player key {}", player.player_key),
            ));
        }
    }
    Ok(roster)
}

/// Parses one batched player-stats document.
pub fn parse_stats_document(doc: &Value) -> Result<StatsDocument, AppError> {
    serde_json::from_value(doc.clone()).map_err(|e| {
        error!(
            "Player stats document rejected: {} (document preview: {})",
            e,
            preview(doc)
        );
        AppError::document_parse("player stats", e.to_string())
    })
}

/// Parses the daily schedule document into per-team game-day status.
///
/// A team appearing in multiple games on the date keeps the first game's
/// start time; teams absent from the document simply have no entry.
pub fn parse_daily_schedule(doc: &Value) -> Result<GameDayMap, AppError> {
    let parsed: ScheduleDocument = serde_json::from_value(doc.clone()).map_err(|e| {
        error!(
            "Schedule document rejected: {} (document preview: {})",
            e,
            preview(doc)
        );
        AppError::document_parse("schedule", e.to_string())
    })?;

    let mut game_day = GameDayMap::new();
    for date in parsed.dates {
        for game in date.games {
            for team in [game.teams.home.team.name, game.teams.away.team.name] {
                game_day.entry(team).or_insert_with(|| ScheduleEntry {
                    plays_today: true,
                    start_time: game.game_date.clone(),
                });
            }
        }
    }
    Ok(game_day)
}
