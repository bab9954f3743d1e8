use super::roster::PlayerKey;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Canonical per-player record assembled by the merger from roster identity,
/// batched stats, resolved stat categories and the daily schedule.
///
/// Keys are unique within one pipeline run, and every key in `stats` exists
/// in the resolved stat-category map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    #[serde(rename = "playerKey")]
    pub player_key: PlayerKey,
    pub name: String,
    #[serde(rename = "currentPosition")]
    pub current_position: String,
    #[serde(rename = "eligiblePositions")]
    pub eligible_positions: Vec<String>,
    /// Roster change indicator from the platform
    pub moved: bool,
    #[serde(rename = "teamName")]
    pub team_name: Option<String>,
    /// Per-category numeric values keyed by stat identifier
    pub stats: BTreeMap<String, f64>,
    #[serde(rename = "totalFanPoints")]
    pub total_fan_points: f64,
    #[serde(rename = "averageFanPoints")]
    pub average_fan_points: f64,
    #[serde(rename = "playingToday")]
    pub playing_today: bool,
}

impl PlayerRecord {
    /// The aggregate score used when ranking by `criterion`.
    pub fn score(&self, criterion: RankingCriterion) -> f64 {
        match criterion {
            RankingCriterion::TotalFanPoints => self.total_fan_points,
            RankingCriterion::AverageFanPoints => self.average_fan_points,
        }
    }

    /// Projection reported in lineups: position label, name and moved flag.
    pub fn to_simple(&self) -> SimplePlayer {
        SimplePlayer {
            position: self.current_position.clone(),
            name: self.name.clone(),
            moved: self.moved,
        }
    }
}

/// Simplified player projection used in lineup listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimplePlayer {
    pub position: String,
    pub name: String,
    pub moved: bool,
}

/// Aggregate scoring attribute used to rank players for lineup optimization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RankingCriterion {
    TotalFanPoints,
    AverageFanPoints,
}

impl RankingCriterion {
    /// Every criterion the orchestrator optimizes a lineup for.
    pub const ALL: [RankingCriterion; 2] = [
        RankingCriterion::TotalFanPoints,
        RankingCriterion::AverageFanPoints,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RankingCriterion::TotalFanPoints => "totalFanPoints",
            RankingCriterion::AverageFanPoints => "averageFanPoints",
        }
    }
}

impl fmt::Display for RankingCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RankingCriterion {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "totalFanPoints" => Ok(RankingCriterion::TotalFanPoints),
            "averageFanPoints" => Ok(RankingCriterion::AverageFanPoints),
            other => Err(AppError::UnknownRankingCriterion(other.to_string())),
        }
    }
}
