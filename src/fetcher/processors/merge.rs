//! The data merger: joins roster identity, batched stats documents, resolved
//! stat categories and the daily schedule into canonical player records.

use super::parsers::parse_stats_document;
use crate::error::AppError;
use crate::fetcher::models::{
    GameDayMap, PlayerKey, PlayerRecord, StatCategoryMap, TeamRoster,
};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, warn};

/// Merges the fetched inputs into one record per rostered player, in roster
/// document order.
///
/// - Stats from all batches are unioned; a player key appearing in more than
///   one batch violates the requester's disjoint partitioning and is
///   rejected.
/// - Every stat value must reference a resolved stat category.
/// - Roster players absent from every batch keep an empty stats map instead
///   of being dropped.
/// - "Playing today" is the schedule lookup of the player's team, defaulting
///   to not-playing when the team is absent.
pub fn merge_player_records(
    roster: &TeamRoster,
    batch_docs: &[Value],
    stat_categories: &StatCategoryMap,
    schedule: &GameDayMap,
) -> Result<Vec<PlayerRecord>, AppError> {
    let mut merged_stats: HashMap<PlayerKey, (Option<String>, BTreeMap<String, f64>)> =
        HashMap::new();

    for doc in batch_docs {
        let stats_doc = parse_stats_document(doc)?;
        for entry in stats_doc.players {
            if merged_stats.contains_key(&entry.player_key) {
                return Err(AppError::document_parse(
                    "player stats",
                    format!(
                        "player key {} appears in more than one stats batch",
                        entry.player_key
                    ),
                ));
            }
            let mut values = BTreeMap::new();
            for stat in entry.stats {
                if !stat_categories.contains_key(&stat.stat_id) {
                    return Err(AppError::document_parse(
                        "player stats",
                        format!(
                            "stat id {} for player {} is not a resolved stat category",
                            stat.stat_id, entry.player_key
                        ),
                    ));
                }
                values.insert(stat.stat_id, stat.value);
            }
            merged_stats.insert(entry.player_key, (entry.team_name, values));
        }
    }

    let mut records = Vec::with_capacity(roster.len());
    for (key, identity) in roster.iter() {
        let (team_name, stats) = merged_stats
            .remove(key.as_str())
            .unwrap_or((None, BTreeMap::new()));

        let (total_fan_points, weighted_count) = fan_points(&stats, stat_categories);
        let average_fan_points = if weighted_count > 0 {
            total_fan_points / weighted_count as f64
        } else {
            0.0
        };

        let playing_today = team_name
            .as_deref()
            .and_then(|team| schedule.get(team))
            .map(|entry| entry.plays_today)
            .unwrap_or(false);

        records.push(PlayerRecord {
            player_key: key.clone(),
            name: identity.name.clone(),
            current_position: identity.current_position.clone(),
            eligible_positions: identity.eligible_positions.clone(),
            moved: identity.moved,
            team_name,
            stats,
            total_fan_points,
            average_fan_points,
            playing_today,
        });
    }

    if !merged_stats.is_empty() {
        warn!(
            "{} stats entries had no roster counterpart and were dropped",
            merged_stats.len()
        );
    }
    debug!("Merged {} player records", records.len());

    Ok(records)
}

/// Sum of weighted stat values across fan-point categories, plus how many
/// such categories the player has a value for.
fn fan_points(stats: &BTreeMap<String, f64>, categories: &StatCategoryMap) -> (f64, usize) {
    let mut total = 0.0;
    let mut count = 0;
    for (stat_id, value) in stats {
        if let Some(weight) = categories.get(stat_id).and_then(|c| c.fan_point_weight) {
            total += value * weight;
            count += 1;
        }
    }
    (total, count)
}
