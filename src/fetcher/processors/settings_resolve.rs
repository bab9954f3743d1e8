//! Resolution of the stat-category and position-capacity maps from the two
//! settings documents.
//!
//! Both parse steps are pure functions returning fresh maps; the league
//! amendment is applied through an explicit merge. League settings may add
//! to or override the game-level categories but never remove them, so
//! category identifiers referenced downstream stay resolvable.

use super::parsers::preview;
use crate::error::AppError;
use crate::fetcher::models::settings::{GameSettingsDocument, LeagueSettingsDocument};
use crate::fetcher::models::{PositionCapacityMap, StatCategory, StatCategoryMap};
use serde_json::Value;
use tracing::{debug, error};

/// What the league-level settings contribute: category amendments and the
/// roster slot capacities.
#[derive(Debug, Clone, Default)]
pub struct LeagueAmendments {
    pub stat_categories: StatCategoryMap,
    pub position_capacities: PositionCapacityMap,
}

/// Parses the game-level settings document into the base stat-category map.
pub fn parse_game_settings(doc: &Value) -> Result<StatCategoryMap, AppError> {
    let parsed: GameSettingsDocument = serde_json::from_value(doc.clone()).map_err(|e| {
        error!(
            "Game settings document rejected: {} (document preview: {})",
            e,
            preview(doc)
        );
        AppError::document_parse("game settings", e.to_string())
    })?;

    Ok(parsed
        .stat_categories
        .into_iter()
        .map(|def| (def.stat_id.clone(), StatCategory::from(def)))
        .collect())
}

/// Parses the league-level settings document into its amendments.
pub fn parse_league_settings(doc: &Value) -> Result<LeagueAmendments, AppError> {
    let parsed: LeagueSettingsDocument = serde_json::from_value(doc.clone()).map_err(|e| {
        error!(
            "League settings document rejected: {} (document preview: {})",
            e,
            preview(doc)
        );
        AppError::document_parse("league settings", e.to_string())
    })?;

    let stat_categories = parsed
        .league
        .stat_categories
        .into_iter()
        .map(|def| (def.stat_id.clone(), StatCategory::from(def)))
        .collect();
    let position_capacities = parsed
        .league
        .roster_positions
        .into_iter()
        .map(|slot| (slot.position, slot.count))
        .collect();

    Ok(LeagueAmendments {
        stat_categories,
        position_capacities,
    })
}

/// Pure merge: entries in `amendment` add to or override `base`; nothing is
/// removed.
pub fn merge_stat_categories(
    base: &StatCategoryMap,
    amendment: &StatCategoryMap,
) -> StatCategoryMap {
    let mut merged = base.clone();
    for (stat_id, category) in amendment {
        merged.insert(stat_id.clone(), category.clone());
    }
    merged
}

/// Resolves both settings documents into the final maps.
///
/// The league parse is applied strictly after the game-level parse because
/// it amends rather than replaces.
pub fn resolve_settings(
    game_doc: &Value,
    league_doc: &Value,
) -> Result<(StatCategoryMap, PositionCapacityMap), AppError> {
    let base = parse_game_settings(game_doc)?;
    let amendments = parse_league_settings(league_doc)?;
    let resolved = merge_stat_categories(&base, &amendments.stat_categories);
    debug!(
        "Resolved {} stat categories ({} from the league amendment) and {} roster slots",
        resolved.len(),
        amendments.stat_categories.len(),
        amendments.position_capacities.len()
    );
    Ok((resolved, amendments.position_capacities))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn game_doc() -> Value {
        json!({
            "statCategories": [
                { "statId": "1", "name": "Goals", "fanPointWeight": 3.0 },
                { "statId": "2", "name": "Assists", "fanPointWeight": 2.0 },
                { "statId": "3", "name": "Plus/Minus" }
            ]
        })
    }

    fn league_doc() -> Value {
        json!({
            "league": {
                "leagueKey": "nhl.l.84",
                "statCategories": [
                    { "statId": "2", "name": "Assists", "fanPointWeight": 2.5 },
                    { "statId": "31", "name": "Saves", "fanPointWeight": 0.2 }
                ],
                "rosterPositions": [
                    { "position": "C", "count": 2 },
                    { "position": "D", "count": 4 },
                    { "position": "G", "count": 2 },
                    { "position": "BN", "count": 4 }
                ]
            }
        })
    }

    #[test]
    fn test_parse_game_settings() {
        let base = parse_game_settings(&game_doc()).unwrap();
        assert_eq!(base.len(), 3);
        assert_eq!(base["1"].name, "Goals");
        assert_eq!(base["3"].fan_point_weight, None);
    }

    #[test]
    fn test_league_amendment_adds_and_overrides_but_never_removes() {
        let (resolved, _) = resolve_settings(&game_doc(), &league_doc()).unwrap();

        // Override: the league re-weights assists
        assert_eq!(resolved["2"].fan_point_weight, Some(2.5));
        // Addition: goalie saves only exist at league level
        assert_eq!(resolved["31"].name, "Saves");
        // Never removed: base categories survive untouched
        assert_eq!(resolved["1"].fan_point_weight, Some(3.0));
        assert!(resolved.contains_key("3"));
        assert_eq!(resolved.len(), 4);
    }

    #[test]
    fn test_merge_leaves_inputs_untouched() {
        let base = parse_game_settings(&game_doc()).unwrap();
        let amendments = parse_league_settings(&league_doc()).unwrap();

        let merged = merge_stat_categories(&base, &amendments.stat_categories);

        // The merge returns a new map; the base still carries its own weight
        assert_eq!(base["2"].fan_point_weight, Some(2.0));
        assert_eq!(merged["2"].fan_point_weight, Some(2.5));
    }

    #[test]
    fn test_position_capacities_parsed() {
        let (_, capacities) = resolve_settings(&game_doc(), &league_doc()).unwrap();
        assert_eq!(capacities["C"], 2);
        assert_eq!(capacities["D"], 4);
        assert_eq!(capacities["BN"], 4);
        assert_eq!(capacities.len(), 4);
    }

    #[test]
    fn test_malformed_settings_rejected() {
        let err = parse_league_settings(&json!({ "league": { "statCategories": [] } }))
            .unwrap_err();
        assert!(matches!(err, AppError::DocumentParse { .. }));

        let err = parse_game_settings(&json!({ "statCategories": "nope" })).unwrap_err();
        assert!(matches!(err, AppError::DocumentParse { .. }));
    }
}
