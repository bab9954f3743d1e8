use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Resolved stat-category definitions keyed by stat identifier.
///
/// Built in two sequenced steps: game settings produce the base map, league
/// settings amend it. Ordered map so derived-score arithmetic and the
/// serialized report are deterministic.
pub type StatCategoryMap = BTreeMap<String, StatCategory>;

/// Starting-lineup slot capacities keyed by slot label. The bench pseudo-slot
/// uses the `BN` label; a missing `BN` entry means an unbounded bench.
pub type PositionCapacityMap = BTreeMap<String, u32>;

/// One resolved stat category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatCategory {
    #[serde(rename = "statId")]
    pub stat_id: String,
    pub name: String,
    /// Fan-point multiplier; categories without one do not contribute to
    /// derived aggregate scores.
    #[serde(rename = "fanPointWeight", skip_serializing_if = "Option::is_none")]
    pub fan_point_weight: Option<f64>,
}

/// Wire model for the game-level settings document (base stat categories).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSettingsDocument {
    #[serde(rename = "statCategories", default)]
    pub stat_categories: Vec<StatCategoryDef>,
}

/// Wire model for the league-level settings document. Amends the stat
/// categories and defines the roster position capacities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueSettingsDocument {
    pub league: LeagueSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueSettings {
    #[serde(rename = "leagueKey")]
    pub league_key: String,
    #[serde(rename = "statCategories", default)]
    pub stat_categories: Vec<StatCategoryDef>,
    #[serde(rename = "rosterPositions", default)]
    pub roster_positions: Vec<RosterPosition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatCategoryDef {
    #[serde(rename = "statId")]
    pub stat_id: String,
    pub name: String,
    #[serde(rename = "fanPointWeight", default)]
    pub fan_point_weight: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterPosition {
    pub position: String,
    pub count: u32,
}

impl From<StatCategoryDef> for StatCategory {
    fn from(def: StatCategoryDef) -> Self {
        StatCategory {
            stat_id: def.stat_id,
            name: def.name,
            fan_point_weight: def.fan_point_weight,
        }
    }
}
