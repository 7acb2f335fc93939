//! Load state tracking for the team directory and the selected team's schedule
//!
//! Each operation moves `Idle -> Loading -> Loaded | Failed`. The schedule
//! session additionally hands out a ticket per selection so a result that
//! arrives after the user picked another team (or closed the panel) is dropped.

use crate::data_fetcher::models::{Schedule, Team};
use crate::error::AppError;
use tracing::{debug, warn};

/// State of a single asynchronous operation.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    /// Display-ready failure message
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn start_loading(&mut self) {
        *self = LoadState::Loading;
    }

    /// Resolves the operation, converting errors into their display message.
    pub fn finish(&mut self, result: Result<T, AppError>) {
        *self = match result {
            Ok(data) => LoadState::Loaded(data),
            Err(e) => LoadState::Failed(e.user_message()),
        };
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// The team directory loaded once at startup.
#[derive(Debug, Default)]
pub struct TeamDirectory {
    state: LoadState<Vec<Team>>,
}

impl TeamDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_loading(&mut self) {
        self.state.start_loading();
    }

    pub fn finish(&mut self, result: Result<Vec<Team>, AppError>) {
        if let Err(e) = &result {
            warn!("Team directory failed to load: {e}");
        }
        self.state.finish(result);
    }

    pub fn state(&self) -> &LoadState<Vec<Team>> {
        &self.state
    }

    pub fn teams(&self) -> &[Team] {
        self.state.data().map(Vec::as_slice).unwrap_or_default()
    }

    /// Finds a team by identifier or abbreviation.
    pub fn find(&self, id_or_abbreviation: &str) -> Option<&Team> {
        self.teams().iter().find(|team| team.matches(id_or_abbreviation))
    }
}

/// Identifies one schedule request. Only the ticket of the latest selection
/// is accepted by [`ScheduleSession::complete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionTicket {
    generation: u64,
    team_id: String,
}

impl SelectionTicket {
    pub fn team_id(&self) -> &str {
        &self.team_id
    }
}

/// Tracks the selected team and the state of its schedule request.
#[derive(Debug, Default)]
pub struct ScheduleSession {
    generation: u64,
    selected: Option<String>,
    state: LoadState<Schedule>,
}

impl ScheduleSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects a team and starts loading its schedule. Any request still in
    /// flight for an earlier selection becomes stale.
    pub fn select(&mut self, team_id: impl Into<String>) -> SelectionTicket {
        let team_id = team_id.into();
        self.generation += 1;
        self.selected = Some(team_id.clone());
        self.state.start_loading();
        debug!("Selected team {} (generation {})", team_id, self.generation);

        SelectionTicket {
            generation: self.generation,
            team_id,
        }
    }

    /// Closes the schedule panel. Results still in flight are discarded on arrival.
    pub fn close(&mut self) {
        self.generation += 1;
        self.selected = None;
        self.state = LoadState::Idle;
    }

    /// Stores the result of a schedule request.
    ///
    /// Returns `false` and leaves the state untouched when the ticket belongs
    /// to a selection that is no longer current.
    pub fn complete(
        &mut self,
        ticket: &SelectionTicket,
        result: Result<Schedule, AppError>,
    ) -> bool {
        if !self.is_current(ticket) {
            debug!(
                "Discarding stale schedule for team {} (generation {}, current {})",
                ticket.team_id, ticket.generation, self.generation
            );
            return false;
        }

        if let Err(e) = &result {
            warn!("Schedule for team {} failed: {e}", ticket.team_id);
        }
        self.state.finish(result);
        true
    }

    pub fn is_current(&self, ticket: &SelectionTicket) -> bool {
        ticket.generation == self.generation
            && self.selected.as_deref() == Some(ticket.team_id.as_str())
    }

    pub fn selected_team_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn state(&self) -> &LoadState<Schedule> {
        &self.state
    }
}
