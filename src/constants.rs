//! Application-wide constants and configuration values
//!
//! This module centralizes the magic numbers and default settings so the
//! fetchers, the classifier and the config layer agree on them.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// User agent sent with every API request
pub const USER_AGENT: &str = concat!("team_schedule/", env!("CARGO_PKG_VERSION"));

/// Default API settings used when no config file exists
pub mod api {
    /// Base URL of the public ESPN site API, without trailing slash
    pub const DEFAULT_BASE_URL: &str = "https://site.api.espn.com/apis/site/v2/sports";

    /// Default sport path segment
    pub const DEFAULT_SPORT: &str = "basketball";

    /// Default league path segment
    pub const DEFAULT_LEAGUE: &str = "nba";
}

/// Schedule classification limits
pub mod schedule {
    /// Maximum number of completed games kept in the "recent" list
    pub const MAX_RECENT_GAMES: usize = 3;

    /// Maximum number of future games kept in the "upcoming" list
    pub const MAX_UPCOMING_GAMES: usize = 3;

    /// Display name and abbreviation used when a side is missing
    pub const TBD_TEAM: &str = "TBD";
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for API base URL override
    pub const API_URL: &str = "TEAM_SCHEDULE_API_URL";

    /// Environment variable for sport override
    pub const SPORT: &str = "TEAM_SCHEDULE_SPORT";

    /// Environment variable for league override
    pub const LEAGUE: &str = "TEAM_SCHEDULE_LEAGUE";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "TEAM_SCHEDULE_LOG_FILE";

    /// Environment variable for HTTP timeout in seconds
    pub const HTTP_TIMEOUT: &str = "TEAM_SCHEDULE_HTTP_TIMEOUT";
}

/// Log file name used when no custom path is configured
pub const DEFAULT_LOG_FILE_NAME: &str = "team_schedule.log";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_limits() {
        assert_eq!(schedule::MAX_RECENT_GAMES, 3);
        assert_eq!(schedule::MAX_UPCOMING_GAMES, 3);
    }

    #[test]
    fn test_default_base_url_has_no_trailing_slash() {
        assert!(api::DEFAULT_BASE_URL.starts_with("https://"));
        assert!(!api::DEFAULT_BASE_URL.ends_with('/'));
    }

    #[test]
    fn test_user_agent_includes_version() {
        assert!(USER_AGENT.starts_with("team_schedule/"));
        assert!(USER_AGENT.ends_with(env!("CARGO_PKG_VERSION")));
    }
}
