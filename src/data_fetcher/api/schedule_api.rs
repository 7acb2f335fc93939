//! Team schedule resolution

use chrono::{DateTime, Utc};
use reqwest::Client;
use tracing::{info, instrument};

use super::fetch_utils::fetch;
use super::urls::build_team_schedule_url;
use crate::config::Config;
use crate::data_fetcher::models::{Schedule, ScheduleEvent, ScheduleResponse};
use crate::data_fetcher::processors::classify_events;
use crate::error::AppError;

/// Fetches the raw event list of a team. A response without `events` is an empty list.
#[instrument(skip(client, config))]
pub async fn fetch_team_events(
    client: &Client,
    config: &Config,
    team_id: &str,
) -> Result<Vec<ScheduleEvent>, AppError> {
    let url = build_team_schedule_url(&config.league_url(), team_id)?;
    let response: ScheduleResponse = fetch(client, &url).await?;
    Ok(response.events.unwrap_or_default())
}

/// Fetches a team's schedule and classifies it into recent and upcoming games.
///
/// Any network or parse failure aborts the whole resolution; partial results
/// are never returned.
pub async fn resolve_schedule(
    client: &Client,
    config: &Config,
    team_id: &str,
) -> Result<Schedule, AppError> {
    resolve_schedule_at(client, config, team_id, Utc::now()).await
}

/// Same as [`resolve_schedule`] with an explicit "now" instant.
#[instrument(skip(client, config))]
pub async fn resolve_schedule_at(
    client: &Client,
    config: &Config,
    team_id: &str,
    now: DateTime<Utc>,
) -> Result<Schedule, AppError> {
    let events = fetch_team_events(client, config, team_id).await?;
    let schedule = classify_events(&events, now);

    info!(
        "Resolved schedule for team {}: {} events, {} recent, {} upcoming",
        team_id,
        events.len(),
        schedule.recent.len(),
        schedule.upcoming.len()
    );

    Ok(schedule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::api::http_client::create_test_http_client;
    use crate::testing_utils::TestDataBuilder;
    use chrono::{Duration, TimeZone};
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path},
    };

    fn create_mock_config(server: &MockServer) -> Config {
        Config {
            api_base_url: server.uri(),
            sport: "football".to_string(),
            league: "nfl".to_string(),
            ..Config::default()
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 11, 15, 12, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn test_resolve_schedule_success() {
        let mock_server = MockServer::start().await;
        let config = create_mock_config(&mock_server);
        let client = create_test_http_client();
        let now = now();

        let body = ScheduleResponse {
            events: Some(vec![
                TestDataBuilder::completed_event("old", now - Duration::days(7)),
                TestDataBuilder::completed_event("last", now - Duration::days(1)),
                TestDataBuilder::in_progress_event("live", now - Duration::hours(1)),
                TestDataBuilder::scheduled_event("next", now + Duration::days(3)),
            ]),
        };

        Mock::given(method("GET"))
            .and(path("/football/nfl/teams/12/schedule"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .expect(1)
            .mount(&mock_server)
            .await;

        let schedule = resolve_schedule_at(&client, &config, "12", now)
            .await
            .unwrap();

        let recent: Vec<&str> = schedule.recent.iter().map(|g| g.id.as_str()).collect();
        let upcoming: Vec<&str> = schedule.upcoming.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(recent, vec!["last", "old"]);
        assert_eq!(upcoming, vec!["next"]);
    }

    #[tokio::test]
    async fn test_resolve_schedule_without_events_field() {
        let mock_server = MockServer::start().await;
        let config = create_mock_config(&mock_server);
        let client = create_test_http_client();

        Mock::given(method("GET"))
            .and(path("/football/nfl/teams/12/schedule"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"team": {"id": "12"}})),
            )
            .mount(&mock_server)
            .await;

        let schedule = resolve_schedule_at(&client, &config, "12", now())
            .await
            .unwrap();
        assert!(schedule.recent.is_empty());
        assert!(schedule.upcoming.is_empty());
    }

    #[tokio::test]
    async fn test_resolve_schedule_not_found() {
        let mock_server = MockServer::start().await;
        let config = create_mock_config(&mock_server);
        let client = create_test_http_client();

        Mock::given(method("GET"))
            .and(path("/football/nfl/teams/999/schedule"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let error = resolve_schedule_at(&client, &config, "999", now())
            .await
            .unwrap_err();
        assert!(matches!(error, AppError::ApiNotFound { .. }));
        assert!(error.to_string().contains("404"));
        assert!(error.user_message().contains("404"));
    }

    #[tokio::test]
    async fn test_resolve_schedule_bad_event_shape_fails_whole_resolution() {
        let mock_server = MockServer::start().await;
        let config = create_mock_config(&mock_server);
        let client = create_test_http_client();

        Mock::given(method("GET"))
            .and(path("/football/nfl/teams/12/schedule"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"events": [{"date": "2024-11-01T18:00Z"}]})),
            )
            .mount(&mock_server)
            .await;

        let error = resolve_schedule_at(&client, &config, "12", now())
            .await
            .unwrap_err();
        assert!(matches!(error, AppError::ApiUnexpectedStructure { .. }));
    }

    #[tokio::test]
    async fn test_resolve_schedule_rejects_relative_team_id_without_request() {
        let mock_server = MockServer::start().await;
        let config = create_mock_config(&mock_server);
        let client = create_test_http_client();

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"events": []})))
            .expect(0)
            .mount(&mock_server)
            .await;

        let error = resolve_schedule_at(&client, &config, "..", now())
            .await
            .unwrap_err();
        assert!(matches!(error, AppError::TeamNotFound { .. }));
    }
}
