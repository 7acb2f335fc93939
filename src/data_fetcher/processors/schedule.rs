//! Schedule classification: raw events in, bounded recent/upcoming lists out.
//!
//! Pure functions only; the caller supplies "now" so the classification can be
//! exercised on synthetic event lists.

use crate::constants::schedule::{MAX_RECENT_GAMES, MAX_UPCOMING_GAMES};
use crate::data_fetcher::models::{
    Competitor, CompetitorTeam, EventStatus, Game, GameSide, RawScore, Schedule, ScheduleEvent,
    Side, TeamSnapshot,
};
use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use super::time_formatting::parse_event_date;

/// Bucket a game falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Recent,
    Upcoming,
    /// Neither completed nor in the future, e.g. currently in progress
    Dropped,
}

/// Reads the completion flag, looking at the event status first and then at
/// the first competition's status. Absent means not completed.
pub fn is_event_completed(event: &ScheduleEvent) -> bool {
    let completed_flag = |status: Option<&EventStatus>| {
        status
            .and_then(|s| s.status_type.as_ref())
            .and_then(|t| t.completed)
    };

    completed_flag(event.status.as_ref())
        .or_else(|| completed_flag(event.competitions.first().and_then(|c| c.status.as_ref())))
        .unwrap_or(false)
}

fn snapshot_from(team: &CompetitorTeam) -> TeamSnapshot {
    let tbd = TeamSnapshot::tbd();
    TeamSnapshot {
        display_name: team
            .display_name
            .clone()
            .filter(|name| !name.is_empty())
            .unwrap_or(tbd.display_name),
        abbreviation: team
            .abbreviation
            .clone()
            .filter(|abbr| !abbr.is_empty())
            .unwrap_or(tbd.abbreviation),
        logo: team.logo_url(),
    }
}

/// Builds one side of a game from the competitor tagged with `side`,
/// synthesizing a "TBD" side when no such competitor exists.
pub fn extract_side(competitors: &[Competitor], side: Side) -> GameSide {
    let Some(competitor) = competitors
        .iter()
        .find(|c| c.home_away.as_deref() == Some(side.tag()))
    else {
        return GameSide::tbd();
    };

    GameSide {
        team: competitor
            .team
            .as_ref()
            .map(snapshot_from)
            .unwrap_or_else(TeamSnapshot::tbd),
        score: competitor.score.as_ref().and_then(RawScore::display),
    }
}

/// Normalizes a raw event into a `Game`.
///
/// Every missing field has a defined default. A date that is absent or doesn't
/// parse becomes `None`; the completion flag still decides whether the game is
/// a result.
pub fn normalize_event(event: &ScheduleEvent) -> Game {
    let date = match event.date.as_deref().map(parse_event_date) {
        Some(Ok(date)) => Some(date),
        Some(Err(e)) => {
            warn!("Event {} has an unusable date: {}", event.id, e);
            None
        }
        None => {
            warn!("Event {} has no date", event.id);
            None
        }
    };

    let competitors = event
        .competitions
        .first()
        .map(|c| c.competitors.as_slice())
        .unwrap_or_default();

    let name = event.name.clone().unwrap_or_default();
    let short_name = event.short_name.clone().unwrap_or_else(|| name.clone());

    Game {
        id: event.id.clone(),
        date,
        name,
        short_name,
        completed: is_event_completed(event),
        home: extract_side(competitors, Side::Home),
        away: extract_side(competitors, Side::Away),
    }
}

/// Decides which list a game belongs to relative to `now`.
pub fn classify_game(game: &Game, now: DateTime<Utc>) -> Classification {
    if game.completed {
        Classification::Recent
    } else if game.date.is_some_and(|date| date > now) {
        Classification::Upcoming
    } else {
        Classification::Dropped
    }
}

/// Partitions events into at most three recent games (newest first) and at
/// most three upcoming games (soonest first).
///
/// Completed games without a usable date sort after every dated result; other
/// undated games are dropped. Sorting is stable, so games sharing a timestamp
/// keep their input order.
pub fn classify_events(events: &[ScheduleEvent], now: DateTime<Utc>) -> Schedule {
    let mut recent = Vec::new();
    let mut upcoming = Vec::new();

    for event in events {
        let game = normalize_event(event);

        match classify_game(&game, now) {
            Classification::Recent => recent.push(game),
            Classification::Upcoming => upcoming.push(game),
            Classification::Dropped => {
                debug!(
                    "Dropping event {} ({}): not completed and not in the future",
                    game.id, game.short_name
                );
            }
        }
    }

    // `None < Some`, so descending order puts undated results last
    recent.sort_by(|a, b| b.date.cmp(&a.date));
    recent.truncate(MAX_RECENT_GAMES);

    upcoming.sort_by(|a, b| a.date.cmp(&b.date));
    upcoming.truncate(MAX_UPCOMING_GAMES);

    Schedule { recent, upcoming }
}
