//! URL building utilities for API endpoints

use reqwest::Url;

use crate::error::AppError;

/// Builds the team directory URL for a league.
///
/// # Arguments
/// * `league_url` - Base URL of the league, e.g. `https://site.api.espn.com/apis/site/v2/sports/basketball/nba`
///
/// # Example
/// ```
/// use team_schedule::data_fetcher::api::build_teams_url;
///
/// let url = build_teams_url("https://api.example.com/sports/basketball/nba");
/// assert_eq!(url, "https://api.example.com/sports/basketball/nba/teams");
/// ```
pub fn build_teams_url(league_url: &str) -> String {
    format!("{}/teams", league_url.trim_end_matches('/'))
}

/// Builds the schedule URL for a single team.
///
/// The team id is appended as one percent-encoded path segment. Ids that would
/// still be resolved as relative segments (`.`, `..`) or that are empty are rejected.
///
/// # Example
/// ```
/// use team_schedule::data_fetcher::api::build_team_schedule_url;
///
/// let url = build_team_schedule_url("https://api.example.com/sports/basketball/nba", "13").unwrap();
/// assert_eq!(url, "https://api.example.com/sports/basketball/nba/teams/13/schedule");
/// ```
pub fn build_team_schedule_url(league_url: &str, team_id: &str) -> Result<String, AppError> {
    if matches!(team_id.trim(), "" | "." | "..") {
        return Err(AppError::team_not_found(team_id));
    }

    let teams_url = build_teams_url(league_url);
    let mut url = Url::parse(&teams_url)
        .map_err(|e| AppError::config_error(format!("Invalid API URL '{teams_url}': {e}")))?;

    url.path_segments_mut()
        .map_err(|_| AppError::config_error(format!("API URL '{teams_url}' cannot have a path")))?
        .push(team_id)
        .push("schedule");

    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_teams_url_trailing_slash() {
        assert_eq!(
            build_teams_url("https://api.example.com/sports/hockey/nhl/"),
            "https://api.example.com/sports/hockey/nhl/teams"
        );
    }

    #[test]
    fn test_build_team_schedule_url_encodes_id() {
        assert_eq!(
            build_team_schedule_url("https://api.example.com/x", "a/b c").unwrap(),
            "https://api.example.com/x/teams/a%2Fb%20c/schedule"
        );
        assert_eq!(
            build_team_schedule_url("https://api.example.com/x/", "25").unwrap(),
            "https://api.example.com/x/teams/25/schedule"
        );
    }

    #[test]
    fn test_build_team_schedule_url_rejects_relative_segments() {
        for team_id in [".", "..", ""] {
            let result = build_team_schedule_url("https://api.example.com/x", team_id);
            assert!(
                matches!(result, Err(AppError::TeamNotFound { .. })),
                "team id {team_id:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_build_team_schedule_url_keeps_dotted_ids_inside_segment() {
        assert_eq!(
            build_team_schedule_url("https://api.example.com/x", "a.b").unwrap(),
            "https://api.example.com/x/teams/a.b/schedule"
        );
    }

    #[test]
    fn test_build_team_schedule_url_invalid_base() {
        let result = build_team_schedule_url("not a url", "13");
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
