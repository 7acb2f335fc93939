//! Generic HTTP fetching with status-code and parse error mapping

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument};

use crate::error::AppError;

/// Generic fetch function with error classification.
///
/// One GET, no retry. Non-success statuses map to status-carrying errors and
/// bodies that don't deserialize into `T` are split into empty, malformed and
/// unexpected-structure failures.
#[instrument(skip(client))]
pub(super) async fn fetch<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, AppError> {
    info!("Fetching data from URL: {url}");

    let response = match client.get(url).send().await {
        Ok(resp) => resp,
        Err(e) => {
            error!("Request failed for URL {}: {}", url, e);
            return if e.is_timeout() {
                Err(AppError::network_timeout(url))
            } else if e.is_connect() {
                Err(AppError::network_connection(url, e.to_string()))
            } else {
                Err(AppError::ApiFetch(e))
            };
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        error!("HTTP {} - {} (URL: {})", status_code, reason, url);

        return Err(match status_code {
            404 => AppError::api_not_found(url),
            400..=499 => AppError::api_client_error(status_code, reason, url),
            _ => AppError::api_server_error(status_code, reason, url),
        });
    }

    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response text from URL {}: {}", url, e);
            return Err(if e.is_timeout() {
                AppError::network_timeout(url)
            } else {
                AppError::ApiFetch(e)
            });
        }
    };

    debug!("Response length: {} bytes", response_text.len());
    let preview: String = response_text.chars().take(1024).collect();
    debug!("Response text (first 1024 chars): {preview}");

    parse_response(&response_text, url)
}

/// Deserializes a response body, classifying the failure when it doesn't fit `T`.
pub(super) fn parse_response<T: DeserializeOwned>(
    response_text: &str,
    url: &str,
) -> Result<T, AppError> {
    match serde_json::from_str::<T>(response_text) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            error!("Failed to parse API response: {} (URL: {})", e, url);
            error!(
                "Response text (first 200 chars): {}",
                &response_text.chars().take(200).collect::<String>()
            );

            let trimmed = response_text.trim_start();
            if trimmed.is_empty() {
                Err(AppError::api_no_data("Response body is empty", url))
            } else if !trimmed.starts_with('{') && !trimmed.starts_with('[') {
                Err(AppError::api_malformed_json(
                    "Response is not valid JSON",
                    url,
                ))
            } else {
                Err(AppError::api_unexpected_structure(e.to_string(), url))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::TeamsResponse;

    #[test]
    fn test_parse_response_empty_body() {
        let result = parse_response::<TeamsResponse>("   ", "https://example.com");
        assert!(matches!(result, Err(AppError::ApiNoData { .. })));
    }

    #[test]
    fn test_parse_response_not_json() {
        let result = parse_response::<TeamsResponse>("<html>oops</html>", "https://example.com");
        assert!(matches!(result, Err(AppError::ApiMalformedJson { .. })));
    }

    #[test]
    fn test_parse_response_unexpected_structure() {
        let result =
            parse_response::<TeamsResponse>(r#"{"sports": "nope"}"#, "https://example.com");
        assert!(matches!(result, Err(AppError::ApiUnexpectedStructure { .. })));
    }

    #[test]
    fn test_parse_response_success() {
        let result = parse_response::<TeamsResponse>(r#"{"sports": []}"#, "https://example.com");
        assert!(result.unwrap().sports.is_empty());
    }
}
