//! HTTP client creation and configuration utilities

use reqwest::Client;
use std::time::Duration;

/// Creates a configured HTTP client with an explicit request deadline.
///
/// Every request made through this client fails with a timeout error once
/// `timeout_seconds` elapse; there is no unbounded transport default.
pub fn create_http_client_with_timeout(timeout_seconds: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .connect_timeout(Duration::from_secs(timeout_seconds.min(10)))
        .pool_max_idle_per_host(crate::constants::HTTP_POOL_MAX_IDLE_PER_HOST)
        .user_agent(crate::constants::USER_AGENT)
        .build()
}

/// Creates an HTTP client for testing with default timeout
#[cfg(test)]
pub fn create_test_http_client() -> Client {
    create_http_client_with_timeout(crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS)
        .expect("Failed to create test HTTP client")
}

/// Creates the HTTP client used for all API calls, honoring the configured timeout.
pub fn create_http_client(config: &crate::config::Config) -> Result<Client, crate::error::AppError> {
    Ok(create_http_client_with_timeout(config.http_timeout_seconds)?)
}
