use crate::constants::schedule::TBD_TEAM;
use chrono::{DateTime, Utc};

/// Home or away designation of a participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Home,
    Away,
}

impl Side {
    /// Wire tag used by the API's `homeAway` field.
    pub fn tag(self) -> &'static str {
        match self {
            Side::Home => "home",
            Side::Away => "away",
        }
    }
}

/// The team as it appears inside a single game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamSnapshot {
    pub display_name: String,
    pub abbreviation: String,
    pub logo: Option<String>,
}

impl TeamSnapshot {
    /// Placeholder used when a side has not been decided or was not reported.
    pub fn tbd() -> Self {
        Self {
            display_name: TBD_TEAM.to_string(),
            abbreviation: TBD_TEAM.to_string(),
            logo: None,
        }
    }

    pub fn is_tbd(&self) -> bool {
        *self == Self::tbd()
    }
}

/// One side of a game. `score` is `None` until the API reports one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSide {
    pub team: TeamSnapshot,
    pub score: Option<String>,
}

impl GameSide {
    pub fn tbd() -> Self {
        Self {
            team: TeamSnapshot::tbd(),
            score: None,
        }
    }
}

/// A normalized game derived from a raw schedule event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub id: String,
    /// Kickoff time; `None` when the API sent no date or one that doesn't parse
    pub date: Option<DateTime<Utc>>,
    pub name: String,
    pub short_name: String,
    pub completed: bool,
    pub home: GameSide,
    pub away: GameSide,
}

/// Result of a schedule resolution: at most three recent and three upcoming games.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    /// Completed games, most recent first
    pub recent: Vec<Game>,
    /// Future games that are not completed, soonest first
    pub upcoming: Vec<Game>,
}

impl Schedule {
    pub fn is_empty(&self) -> bool {
        self.recent.is_empty() && self.upcoming.is_empty()
    }
}
