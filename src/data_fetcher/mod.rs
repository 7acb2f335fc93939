pub mod api;
pub mod models;
pub mod processors;

pub use api::{load_teams, resolve_schedule};
pub use models::{Game, Schedule, Team};
pub use processors::classify_events;
