//! Team directory loading

use reqwest::Client;
use tracing::{info, instrument};

use super::fetch_utils::fetch;
use super::urls::build_teams_url;
use crate::config::Config;
use crate::data_fetcher::models::{Team, TeamsResponse};
use crate::error::AppError;

/// Fetches every team of the configured league.
///
/// One request, no retry. The team list is taken from the first sport and
/// first league of the response; a response without them is a shape failure,
/// never a partial list.
///
/// # Returns
/// * `Ok(Vec<Team>)` - Teams in the order the API listed them
/// * `Err(AppError)` - HTTP, network or parse failure
#[instrument(skip(client, config))]
pub async fn load_teams(client: &Client, config: &Config) -> Result<Vec<Team>, AppError> {
    let url = build_teams_url(&config.league_url());
    let response: TeamsResponse = fetch(client, &url).await?;
    let teams = extract_teams(response, &url)?;

    info!("Loaded {} teams from {}", teams.len(), url);
    Ok(teams)
}

/// Pulls the team list out of the nested sports -> leagues -> teams structure.
pub fn extract_teams(response: TeamsResponse, url: &str) -> Result<Vec<Team>, AppError> {
    let league = response.into_first_league().ok_or_else(|| {
        AppError::api_unexpected_structure("Response has no sport or league entry", url)
    })?;

    Ok(league.teams.into_iter().map(|wrapper| wrapper.team).collect())
}
