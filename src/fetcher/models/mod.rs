pub mod player;
pub mod report;
pub mod roster;
pub mod schedule;
pub mod settings;
pub mod stats;

// Re-export the types the rest of the crate works with
pub use player::{PlayerRecord, RankingCriterion, SimplePlayer};
pub use report::RosterReport;
pub use roster::{PlayerKey, RosterDocument, RosterEntry, RosterPlayer, TeamRoster};
pub use schedule::{GameDayMap, ScheduleDocument, ScheduleEntry};
pub use settings::{
    GameSettingsDocument, LeagueSettingsDocument, PositionCapacityMap, StatCategory,
    StatCategoryMap,
};
pub use stats::{PlayerStatsEntry, StatValue, StatsDocument};
