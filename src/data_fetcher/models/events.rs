//! Raw wire shapes of the team schedule endpoint.
//!
//! Everything below the event identifier is optional on the wire; the
//! normalization in `processors::schedule` decides what absence means.

use super::teams::Logo;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleResponse {
    #[serde(default)]
    pub events: Option<Vec<ScheduleEvent>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleEvent {
    pub id: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "shortName", default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub status: Option<EventStatus>,
    #[serde(default)]
    pub competitions: Vec<Competition>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventStatus {
    #[serde(rename = "type", default)]
    pub status_type: Option<StatusType>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusType {
    /// e.g. "STATUS_SCHEDULED", "STATUS_IN_PROGRESS", "STATUS_FINAL"
    #[serde(default)]
    pub name: Option<String>,
    /// "pre", "in" or "post"
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub completed: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Competition {
    #[serde(default)]
    pub competitors: Vec<Competitor>,
    #[serde(default)]
    pub status: Option<EventStatus>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Competitor {
    #[serde(rename = "homeAway", default)]
    pub home_away: Option<String>,
    #[serde(default)]
    pub team: Option<CompetitorTeam>,
    #[serde(default)]
    pub score: Option<RawScore>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompetitorTeam {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "displayName", default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub abbreviation: Option<String>,
    /// Scoreboard-style single logo URL
    #[serde(default)]
    pub logo: Option<String>,
    /// Schedule-style logo list
    #[serde(default)]
    pub logos: Vec<Logo>,
}

impl CompetitorTeam {
    /// Logo URL, preferring the single `logo` field over the first entry of `logos`.
    pub fn logo_url(&self) -> Option<String> {
        self.logo
            .clone()
            .filter(|logo| !logo.is_empty())
            .or_else(|| self.logos.first().map(|logo| logo.href.clone()))
    }
}

/// Scores arrive as a string on the scoreboard, as an object on team schedules,
/// and occasionally as a bare number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawScore {
    Text(String),
    Number(f64),
    Detailed {
        #[serde(default)]
        value: Option<f64>,
        #[serde(rename = "displayValue", default)]
        display_value: Option<String>,
    },
}

impl RawScore {
    /// Display value of the score, or `None` when the API sent an empty score.
    pub fn display(&self) -> Option<String> {
        match self {
            RawScore::Text(text) => non_empty(text),
            RawScore::Number(value) => Some(format_number(*value)),
            RawScore::Detailed {
                value,
                display_value,
            } => display_value
                .as_deref()
                .and_then(non_empty)
                .or_else(|| value.map(format_number)),
        }
    }
}

fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
