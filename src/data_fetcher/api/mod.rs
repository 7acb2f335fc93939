mod fetch_utils;
pub mod http_client;
pub mod schedule_api;
pub mod teams_api;
pub mod urls;

pub use http_client::{create_http_client, create_http_client_with_timeout};
pub use schedule_api::{fetch_team_events, resolve_schedule, resolve_schedule_at};
pub use teams_api::{extract_teams, load_teams};
pub use urls::{build_team_schedule_url, build_teams_url};
