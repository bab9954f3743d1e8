use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-team game-day status keyed by team name, derived from the schedule
/// service's daily document.
pub type GameDayMap = HashMap<String, ScheduleEntry>;

/// Whether a team plays on the queried date, and when.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleEntry {
    pub plays_today: bool,
    pub start_time: Option<String>,
}

/// Wire model for the daily schedule document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleDocument {
    #[serde(default)]
    pub dates: Vec<ScheduleDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleDate {
    pub date: String,
    #[serde(default)]
    pub games: Vec<ScheduleGameEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleGameEntry {
    #[serde(rename = "gameDate", default)]
    pub game_date: Option<String>,
    pub teams: ScheduleMatchup,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleMatchup {
    pub home: ScheduleSide,
    pub away: ScheduleSide,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleSide {
    pub team: ScheduleTeam,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleTeam {
    pub name: String,
}
