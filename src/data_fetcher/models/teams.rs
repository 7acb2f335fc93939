use serde::{Deserialize, Serialize};

/// A logo reference as returned by the API. The first logo of a team is its primary one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Logo {
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

/// A team from the league directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
    #[serde(default)]
    pub abbreviation: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub logos: Vec<Logo>,
}

impl Team {
    /// Primary logo URL, if the team has any logos.
    pub fn primary_logo(&self) -> Option<&str> {
        self.logos.first().map(|logo| logo.href.as_str())
    }

    /// Matches either the identifier or, case-insensitively, the abbreviation.
    pub fn matches(&self, id_or_abbreviation: &str) -> bool {
        self.id == id_or_abbreviation
            || (!self.abbreviation.is_empty()
                && self.abbreviation.eq_ignore_ascii_case(id_or_abbreviation))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamWrapper {
    pub team: Team,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueEntry {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub abbreviation: Option<String>,
    #[serde(default)]
    pub teams: Vec<TeamWrapper>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SportEntry {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub leagues: Vec<LeagueEntry>,
}

/// Model for the team directory response: sports -> leagues -> team wrappers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamsResponse {
    #[serde(default)]
    pub sports: Vec<SportEntry>,
}

impl TeamsResponse {
    /// The league consulted for the directory: first sport, first league.
    pub fn into_first_league(self) -> Option<LeagueEntry> {
        self.sports.into_iter().next()?.leagues.into_iter().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEAMS_JSON: &str = r#"{
        "sports": [{
            "name": "Basketball",
            "leagues": [{
                "name": "National Basketball Association",
                "abbreviation": "NBA",
                "teams": [
                    {"team": {
                        "id": "1",
                        "uid": "s:40~l:46~t:1",
                        "abbreviation": "ATL",
                        "displayName": "Atlanta Hawks",
                        "location": "Atlanta",
                        "logos": [
                            {"href": "https://a.espncdn.com/i/teamlogos/nba/500/atl.png", "width": 500, "height": 500},
                            {"href": "https://a.espncdn.com/i/teamlogos/nba/500-dark/atl.png"}
                        ]
                    }},
                    {"team": {"id": "2", "displayName": "Boston Celtics"}}
                ]
            }]
        }]
    }"#;

    #[test]
    fn test_teams_response_deserialization() {
        let response: TeamsResponse = serde_json::from_str(TEAMS_JSON).unwrap();
        let league = response.into_first_league().unwrap();
        assert_eq!(league.abbreviation.as_deref(), Some("NBA"));
        assert_eq!(league.teams.len(), 2);

        let hawks = &league.teams[0].team;
        assert_eq!(hawks.id, "1");
        assert_eq!(hawks.display_name, "Atlanta Hawks");
        assert_eq!(hawks.abbreviation, "ATL");
        assert_eq!(hawks.location, "Atlanta");
        assert_eq!(
            hawks.primary_logo(),
            Some("https://a.espncdn.com/i/teamlogos/nba/500/atl.png")
        );
    }

    #[test]
    fn test_team_with_missing_optional_fields() {
        let response: TeamsResponse = serde_json::from_str(TEAMS_JSON).unwrap();
        let league = response.into_first_league().unwrap();
        let celtics = &league.teams[1].team;
        assert_eq!(celtics.abbreviation, "");
        assert_eq!(celtics.location, "");
        assert_eq!(celtics.primary_logo(), None);
    }

    #[test]
    fn test_first_league_missing() {
        let response: TeamsResponse = serde_json::from_str(r#"{"sports": []}"#).unwrap();
        assert!(response.into_first_league().is_none());

        let response: TeamsResponse =
            serde_json::from_str(r#"{"sports": [{"leagues": []}]}"#).unwrap();
        assert!(response.into_first_league().is_none());
    }

    #[test]
    fn test_team_matches_id_or_abbreviation() {
        let team = Team {
            id: "13".to_string(),
            display_name: "Los Angeles Lakers".to_string(),
            abbreviation: "LAL".to_string(),
            location: "Los Angeles".to_string(),
            logos: vec![],
        };
        assert!(team.matches("13"));
        assert!(team.matches("lal"));
        assert!(team.matches("LAL"));
        assert!(!team.matches("LAC"));
        assert!(!team.matches(""));
    }
}
