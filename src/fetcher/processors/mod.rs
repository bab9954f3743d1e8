pub mod merge;
pub mod parsers;
pub mod settings_resolve;

pub use merge::merge_player_records;
pub use parsers::{parse_daily_schedule, parse_stats_document, parse_team_roster};
pub use settings_resolve::{merge_stat_categories, resolve_settings};
