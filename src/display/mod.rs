//! Plain-text rendering of the team directory and schedule panels
//!
//! Everything here is presentation: absent scores are shown as "0" but the
//! underlying `Game` values are never modified.

pub mod colors;

use crate::data_fetcher::models::{Game, Schedule, Team};
use crate::data_fetcher::processors::format_game_time;
use crate::state::LoadState;
use colors::*;
use crossterm::style::{Color, Stylize, style};

/// Shown in place of the kickoff time when the API sent no usable date.
const DATE_UNKNOWN: &str = "Date TBD";

/// Score shown for a side whose score has not been reported.
pub fn display_score(score: Option<&str>) -> &str {
    score.unwrap_or("0")
}

/// Formats a completed game, e.g. "BKN 116 - 120 ATL".
pub fn format_result(game: &Game) -> String {
    format!(
        "{} {} - {} {}",
        game.away.team.abbreviation,
        display_score(game.away.score.as_deref()),
        display_score(game.home.score.as_deref()),
        game.home.team.abbreviation
    )
}

/// Formats a future game, e.g. "BKN @ ATL".
pub fn format_matchup(game: &Game) -> String {
    format!(
        "{} @ {}",
        game.away.team.abbreviation, game.home.team.abbreviation
    )
}

/// Renders panels as text, optionally with ANSI colors.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    plain: bool,
}

impl Renderer {
    pub fn new(plain: bool) -> Self {
        Self { plain }
    }

    fn paint(&self, text: &str, color: Color, bold: bool) -> String {
        if self.plain {
            return text.to_string();
        }
        let styled = style(text.to_string()).with(color);
        if bold {
            styled.bold().to_string()
        } else {
            styled.to_string()
        }
    }

    fn error_panel(&self, message: &str) -> String {
        format!("{}\n", self.paint(&format!("Error: {message}"), error_fg(), true))
    }

    /// Renders the team directory according to its load state.
    pub fn render_directory(&self, state: &LoadState<Vec<Team>>) -> String {
        match state {
            LoadState::Idle | LoadState::Loading => "Loading teams...\n".to_string(),
            LoadState::Failed(message) => self.error_panel(message),
            LoadState::Loaded(teams) => self.render_team_table(teams),
        }
    }

    pub fn render_team_table(&self, teams: &[Team]) -> String {
        if teams.is_empty() {
            return "No teams found\n".to_string();
        }

        let mut out = String::new();
        let header = format!("{:<5} {:<28} {:<18} {}", "ABBR", "TEAM", "LOCATION", "ID");
        out.push_str(&self.paint(&header, header_fg(), true));
        out.push('\n');

        for team in teams {
            out.push_str(&format!(
                "{} {} {:<18} {}\n",
                self.paint(&format!("{:<5}", team.abbreviation), abbreviation_fg(), false),
                self.paint(&format!("{:<28}", team.display_name), text_fg(), false),
                team.location,
                team.id
            ));
        }
        out
    }

    /// Renders the schedule panel of the selected team.
    pub fn render_schedule(&self, team: &Team, state: &LoadState<Schedule>) -> String {
        let mut out = String::new();
        let title = if team.abbreviation.is_empty() {
            team.display_name.clone()
        } else {
            format!("{} ({})", team.display_name, team.abbreviation)
        };
        out.push_str(&self.paint(&title, header_fg(), true));
        out.push('\n');

        match state {
            LoadState::Idle | LoadState::Loading => out.push_str("Loading schedule...\n"),
            LoadState::Failed(message) => out.push_str(&self.error_panel(message)),
            LoadState::Loaded(schedule) => {
                self.push_section(&mut out, "Recent games", "No recent games", &schedule.recent, |g| {
                    self.paint(&format_result(g), score_fg(), false)
                });
                self.push_section(
                    &mut out,
                    "Upcoming games",
                    "No upcoming games",
                    &schedule.upcoming,
                    |g| self.paint(&format_matchup(g), text_fg(), false),
                );
            }
        }
        out
    }

    fn push_section(
        &self,
        out: &mut String,
        title: &str,
        empty_message: &str,
        games: &[Game],
        line: impl Fn(&Game) -> String,
    ) {
        out.push('\n');
        out.push_str(&self.paint(title, section_fg(), true));
        out.push('\n');

        if games.is_empty() {
            out.push_str(&format!("  {empty_message}\n"));
            return;
        }
        for game in games {
            let when = game
                .date
                .as_ref()
                .map(format_game_time)
                .unwrap_or_else(|| DATE_UNKNOWN.to_string());
            out.push_str(&format!("  {:<17} {}\n", when, line(game)));
        }
    }
}
