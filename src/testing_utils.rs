use crate::data_fetcher::models::{
    Competition, Competitor, CompetitorTeam, EventStatus, Logo, RawScore, ScheduleEvent,
    StatusType, Team,
};
use chrono::{DateTime, SecondsFormat, Utc};

/// Test utilities for creating mock data and testing scenarios
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Creates a status block with the given completion flag
    pub fn status(completed: bool) -> EventStatus {
        let (name, state) = if completed {
            ("STATUS_FINAL", "post")
        } else {
            ("STATUS_SCHEDULED", "pre")
        };
        EventStatus {
            status_type: Some(StatusType {
                name: Some(name.to_string()),
                state: Some(state.to_string()),
                completed: Some(completed),
            }),
        }
    }

    /// Creates a competitor with a team snapshot on the given side
    pub fn competitor(side: &str, abbreviation: &str, score: Option<&str>) -> Competitor {
        Competitor {
            home_away: Some(side.to_string()),
            team: Some(CompetitorTeam {
                id: Some(format!("{}-id", abbreviation.to_lowercase())),
                display_name: Some(format!("{abbreviation} Team")),
                abbreviation: Some(abbreviation.to_string()),
                logo: None,
                logos: vec![Logo {
                    href: format!(
                        "https://example.com/logos/{}.png",
                        abbreviation.to_lowercase()
                    ),
                    width: None,
                    height: None,
                }],
            }),
            score: score.map(|s| RawScore::Detailed {
                value: s.parse().ok(),
                display_value: Some(s.to_string()),
            }),
        }
    }

    fn event(
        id: &str,
        date: DateTime<Utc>,
        status: EventStatus,
        scores: Option<(&str, &str)>,
    ) -> ScheduleEvent {
        let (home_score, away_score) = match scores {
            Some((home, away)) => (Some(home), Some(away)),
            None => (None, None),
        };
        ScheduleEvent {
            id: id.to_string(),
            date: Some(date.to_rfc3339_opts(SecondsFormat::Secs, true)),
            name: Some("AWY Team at HOM Team".to_string()),
            short_name: Some("AWY @ HOM".to_string()),
            status: None,
            competitions: vec![Competition {
                competitors: vec![
                    Self::competitor("home", "HOM", home_score),
                    Self::competitor("away", "AWY", away_score),
                ],
                status: Some(status),
            }],
        }
    }

    /// Creates a finished game with a 101-99 score
    pub fn completed_event(id: &str, date: DateTime<Utc>) -> ScheduleEvent {
        Self::event(id, date, Self::status(true), Some(("101", "99")))
    }

    /// Creates a scheduled game without scores
    pub fn scheduled_event(id: &str, date: DateTime<Utc>) -> ScheduleEvent {
        Self::event(id, date, Self::status(false), None)
    }

    /// Creates a game that has started but not finished
    pub fn in_progress_event(id: &str, date: DateTime<Utc>) -> ScheduleEvent {
        let status = EventStatus {
            status_type: Some(StatusType {
                name: Some("STATUS_IN_PROGRESS".to_string()),
                state: Some("in".to_string()),
                completed: Some(false),
            }),
        };
        Self::event(id, date, status, Some(("54", "50")))
    }

    /// Creates a directory team
    pub fn team(id: &str, abbreviation: &str, display_name: &str) -> Team {
        Team {
            id: id.to_string(),
            display_name: display_name.to_string(),
            abbreviation: abbreviation.to_string(),
            location: display_name
                .split_whitespace()
                .next()
                .unwrap_or_default()
                .to_string(),
            logos: vec![Logo {
                href: format!(
                    "https://example.com/logos/{}.png",
                    abbreviation.to_lowercase()
                ),
                width: Some(500),
                height: Some(500),
            }],
        }
    }
}
