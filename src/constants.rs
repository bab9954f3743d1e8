//! Application-wide constants and configuration values
//!
//! This module centralizes all magic numbers and configuration constants
//! to improve maintainability and make the codebase more configurable.

#![allow(dead_code)]

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 100;

/// Default UTC offset (hours) of the reference time zone used when no date
/// is given. The fantasy platform keys its "daily" data to US Eastern time.
pub const DEFAULT_REFERENCE_UTC_OFFSET_HOURS: i32 = -5;

/// Credentials expiring within this many seconds are refreshed up front
pub const TOKEN_REFRESH_LEEWAY_SECONDS: i64 = 60;

/// Batching limits for per-player stats queries
pub mod batch {
    /// The platform rejects stats queries naming more than this many players
    pub const UPSTREAM_PLAYER_LIMIT: usize = 25;

    /// Players per stats sub-request, kept conservatively under the upstream limit
    pub const PLAYERS_PER_REQUEST: usize = 20;
}

/// Roster slot labels with special meaning to the optimizer
pub mod slots {
    /// Bench pseudo-slot; absent from a capacity map means unbounded bench
    pub const BENCH: &str = "BN";

    /// Forward flex slot, eligible to any of C/LW/RW
    pub const FORWARD_FLEX: &str = "F";

    /// Utility slot, eligible to any skater
    pub const UTILITY: &str = "UTIL";

    /// Goalie position label, excluded from the utility slot
    pub const GOALIE: &str = "G";
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for the fantasy platform API base URL override
    pub const API_BASE_URL: &str = "BENCHBOSS_API_BASE_URL";

    /// Environment variable for the daily schedule service base URL override
    pub const SCHEDULE_BASE_URL: &str = "BENCHBOSS_SCHEDULE_BASE_URL";

    /// Environment variable for the OAuth token endpoint override
    pub const TOKEN_URL: &str = "BENCHBOSS_TOKEN_URL";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "BENCHBOSS_LOG_FILE";

    /// Environment variable for HTTP timeout in seconds (default: 30)
    pub const HTTP_TIMEOUT: &str = "BENCHBOSS_HTTP_TIMEOUT";

    /// Environment variable for the credential file path
    pub const CREDENTIAL_FILE: &str = "BENCHBOSS_CREDENTIAL_FILE";
}
