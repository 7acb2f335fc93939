//! Team Schedule Library
//!
//! Fetches a league's team directory and a team's schedule from the public
//! ESPN sports API, and classifies the schedule into the last three results
//! and the next three games.
//!
//! # Examples
//!
//! ```rust,no_run
//! use team_schedule::config::Config;
//! use team_schedule::data_fetcher::api::{create_http_client, load_teams, resolve_schedule};
//! use team_schedule::error::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::default();
//!     let client = create_http_client(&config)?;
//!
//!     let teams = load_teams(&client, &config).await?;
//!     if let Some(team) = teams.first() {
//!         let schedule = resolve_schedule(&client, &config, &team.id).await?;
//!         for game in &schedule.recent {
//!             println!("{:?} {}", game.date, game.short_name);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod display;
pub mod error;
pub mod logging;
pub mod state;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::api::{load_teams, resolve_schedule};
pub use data_fetcher::models::{Game, GameSide, Schedule, Team, TeamSnapshot};
pub use data_fetcher::processors::classify_events;
pub use error::AppError;
pub use state::{LoadState, ScheduleSession, TeamDirectory};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
