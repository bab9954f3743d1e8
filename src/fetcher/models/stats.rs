use super::roster::PlayerKey;
use serde::{Deserialize, Serialize};

/// Wire model for one batched player-stats document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsDocument {
    #[serde(default)]
    pub players: Vec<PlayerStatsEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerStatsEntry {
    #[serde(rename = "playerKey")]
    pub player_key: PlayerKey,
    /// Team affiliation used for the schedule lookup. Optional: players
    /// without a team (e.g. just drafted) simply never "play today".
    #[serde(rename = "teamName", default)]
    pub team_name: Option<String>,
    #[serde(default)]
    pub stats: Vec<StatValue>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatValue {
    #[serde(rename = "statId")]
    pub stat_id: String,
    pub value: f64,
}
