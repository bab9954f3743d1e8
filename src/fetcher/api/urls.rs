//! Resource paths and URL construction for the platform and schedule
//! services, plus key derivation from the team key.
//!
//! A team key has the shape `<game>.l.<league>.t.<team>`; the league key is
//! its first three dot-separated components, the game key its first.

use crate::error::AppError;
use crate::fetcher::models::PlayerKey;

/// Resource path for a team's roster on a given date.
pub fn roster_resource(team_key: &str, date: &str) -> String {
    format!("team/{team_key}/roster;date={date}")
}

/// Resource path for one batched stats query.
pub fn stats_resource(player_keys: &[PlayerKey]) -> String {
    format!("players;player_keys={}/stats", player_keys.join(","))
}

/// Resource path for the game-level stat category definitions.
pub fn game_settings_resource(game_key: &str) -> String {
    format!("game/{game_key}/stat_categories")
}

/// Resource path for the league settings document.
pub fn league_settings_resource(league_key: &str) -> String {
    format!("league/{league_key}/settings")
}

/// Full URL for the daily schedule document.
pub fn schedule_url(schedule_base_url: &str, date: &str) -> String {
    format!(
        "{}/schedule?date={date}",
        schedule_base_url.trim_end_matches('/')
    )
}

/// Derives the league key from a team key.
pub fn league_key_from_team_key(team_key: &str) -> Result<String, AppError> {
    let parts: Vec<&str> = team_key.split('.').collect();
    if parts.len() < 5 || parts.iter().any(|p| p.is_empty()) {
        return Err(AppError::InvalidTeamKey(team_key.to_string()));
    }
    Ok(parts[..3].join("."))
}

/// Derives the game key from a team key.
pub fn game_key_from_team_key(team_key: &str) -> Result<String, AppError> {
    let parts: Vec<&str> = team_key.split('.').collect();
    if parts.len() < 5 || parts.iter().any(|p| p.is_empty()) {
        return Err(AppError::InvalidTeamKey(team_key.to_string()));
    }
    Ok(parts[0].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_resource() {
        assert_eq!(
            roster_resource("nhl.l.84.t.3", "2026-01-15"),
            "team/nhl.l.84.t.3/roster;date=2026-01-15"
        );
    }

    #[test]
    fn test_stats_resource_joins_keys() {
        let keys = vec!["nhl.p.1".to_string(), "nhl.p.2".to_string()];
        assert_eq!(
            stats_resource(&keys),
            "players;player_keys=nhl.p.1,nhl.p.2/stats"
        );
    }

    #[test]
    fn test_settings_resources() {
        assert_eq!(game_settings_resource("nhl"), "game/nhl/stat_categories");
        assert_eq!(
            league_settings_resource("nhl.l.84"),
            "league/nhl.l.84/settings"
        );
    }

    #[test]
    fn test_schedule_url_trims_trailing_slash() {
        assert_eq!(
            schedule_url("https://stats.example.com/api/v1/", "2026-01-15"),
            "https://stats.example.com/api/v1/schedule?date=2026-01-15"
        );
    }

    #[test]
    fn test_key_derivation() {
        assert_eq!(
            league_key_from_team_key("nhl.l.84.t.3").unwrap(),
            "nhl.l.84"
        );
        assert_eq!(game_key_from_team_key("nhl.l.84.t.3").unwrap(), "nhl");
    }

    #[test]
    fn test_key_derivation_rejects_malformed_team_key() {
        for bad in ["nhl", "nhl.l.84", "nhl.l.84.t", "nhl..84.t.3", ""] {
            assert!(
                matches!(
                    league_key_from_team_key(bad),
                    Err(AppError::InvalidTeamKey(_))
                ),
                "expected {bad:?} to be rejected"
            );
            assert!(game_key_from_team_key(bad).is_err());
        }
    }
}
