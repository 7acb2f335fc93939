use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to fetch data from API: {0}")]
    ApiFetch(#[from] reqwest::Error),

    // Specific HTTP status code errors
    #[error("API request not found (404): {url}")]
    ApiNotFound { url: String },

    #[error("API server error ({status}): {message} (URL: {url})")]
    ApiServerError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("API client error ({status}): {message} (URL: {url})")]
    ApiClientError {
        status: u16,
        message: String,
        url: String,
    },

    // Network-specific errors
    #[error("Network timeout while fetching data from: {url}")]
    NetworkTimeout { url: String },

    #[error("Connection failed to: {url} - {message}")]
    NetworkConnection { url: String, message: String },

    // Data parsing and validation errors
    #[error("API returned malformed JSON: {message} (URL: {url})")]
    ApiMalformedJson { message: String, url: String },

    #[error("API returned unexpected data structure: {message} (URL: {url})")]
    ApiUnexpectedStructure { message: String, url: String },

    #[error("API returned empty or missing data: {message} (URL: {url})")]
    ApiNoData { message: String, url: String },

    #[error("Team not found: {team}")]
    TeamNotFound { team: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Date/time parsing error: {0}")]
    DateTimeParse(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a date/time parsing error with context
    pub fn datetime_parse_error(msg: impl Into<String>) -> Self {
        Self::DateTimeParse(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create an API not found error
    pub fn api_not_found(url: impl Into<String>) -> Self {
        Self::ApiNotFound { url: url.into() }
    }

    /// Create an API server error (5xx status codes)
    pub fn api_server_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiServerError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an API client error (4xx status codes except 404)
    pub fn api_client_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiClientError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a network timeout error
    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    /// Create a network connection error
    pub fn network_connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a malformed JSON error
    pub fn api_malformed_json(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiMalformedJson {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an unexpected data structure error
    pub fn api_unexpected_structure(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiUnexpectedStructure {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a no data error
    pub fn api_no_data(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiNoData {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a team not found error
    pub fn team_not_found(team: impl Into<String>) -> Self {
        Self::TeamNotFound { team: team.into() }
    }

    /// HTTP status code carried by the error, if it came from a non-success response
    pub fn status_code(&self) -> Option<u16> {
        match self {
            AppError::ApiNotFound { .. } => Some(404),
            AppError::ApiServerError { status, .. } | AppError::ApiClientError { status, .. } => {
                Some(*status)
            }
            AppError::ApiFetch(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if error is a shape/parse failure rather than a transport failure
    pub fn is_parse_failure(&self) -> bool {
        matches!(
            self,
            AppError::ApiMalformedJson { .. }
                | AppError::ApiUnexpectedStructure { .. }
                | AppError::ApiNoData { .. }
        )
    }

    /// Converts the error into a short message suitable for an error panel.
    ///
    /// HTTP failures keep their status code, shape failures collapse into a
    /// generic message, everything else falls back to the error's display text.
    pub fn user_message(&self) -> String {
        if let Some(status) = self.status_code() {
            return format!("HTTP error! status: {status}");
        }
        if self.is_parse_failure() {
            return "Received unexpected data from the API".to_string();
        }
        match self {
            AppError::NetworkTimeout { .. } => "The request timed out".to_string(),
            AppError::NetworkConnection { .. } => "Could not connect to the API".to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_helper() {
        let error = AppError::config_error("Invalid configuration");
        assert!(matches!(error, AppError::Config(_)));
        assert_eq!(
            error.to_string(),
            "Configuration error: Invalid configuration"
        );
    }

    #[test]
    fn test_datetime_parse_error_helper() {
        let error = AppError::datetime_parse_error("Invalid date format");
        assert!(matches!(error, AppError::DateTimeParse(_)));
        assert_eq!(
            error.to_string(),
            "Date/time parsing error: Invalid date format"
        );
    }

    #[test]
    fn test_api_not_found_helper() {
        let error = AppError::api_not_found("https://api.example.com/teams/99/schedule");
        assert!(matches!(error, AppError::ApiNotFound { .. }));
        assert_eq!(
            error.to_string(),
            "API request not found (404): https://api.example.com/teams/99/schedule"
        );
    }

    #[test]
    fn test_api_server_error_helper() {
        let error =
            AppError::api_server_error(500, "Internal server error", "https://api.example.com");
        assert_eq!(
            error.to_string(),
            "API server error (500): Internal server error (URL: https://api.example.com)"
        );
    }

    #[test]
    fn test_api_client_error_helper() {
        let error = AppError::api_client_error(400, "Bad request", "https://api.example.com");
        assert_eq!(
            error.to_string(),
            "API client error (400): Bad request (URL: https://api.example.com)"
        );
    }

    #[test]
    fn test_network_errors() {
        let timeout = AppError::network_timeout("https://api.example.com");
        assert_eq!(
            timeout.to_string(),
            "Network timeout while fetching data from: https://api.example.com"
        );

        let connection = AppError::network_connection("https://api.example.com", "refused");
        assert_eq!(
            connection.to_string(),
            "Connection failed to: https://api.example.com - refused"
        );
    }

    #[test]
    fn test_team_not_found_helper() {
        let error = AppError::team_not_found("XYZ");
        assert_eq!(error.to_string(), "Team not found: XYZ");
    }

    #[test]
    fn test_status_code() {
        assert_eq!(AppError::api_not_found("url").status_code(), Some(404));
        assert_eq!(
            AppError::api_server_error(503, "unavailable", "url").status_code(),
            Some(503)
        );
        assert_eq!(
            AppError::api_client_error(401, "unauthorized", "url").status_code(),
            Some(401)
        );
        assert_eq!(AppError::network_timeout("url").status_code(), None);
        assert_eq!(AppError::config_error("bad").status_code(), None);
    }

    #[test]
    fn test_is_parse_failure() {
        assert!(AppError::api_malformed_json("bad", "url").is_parse_failure());
        assert!(AppError::api_unexpected_structure("bad", "url").is_parse_failure());
        assert!(AppError::api_no_data("empty", "url").is_parse_failure());
        assert!(!AppError::api_not_found("url").is_parse_failure());
        assert!(!AppError::network_timeout("url").is_parse_failure());
    }

    #[test]
    fn test_user_message_contains_status() {
        let message = AppError::api_not_found("https://api.example.com").user_message();
        assert!(message.contains("404"), "unexpected message: {message}");

        let message = AppError::api_server_error(502, "bad gateway", "url").user_message();
        assert!(message.contains("502"), "unexpected message: {message}");
    }

    #[test]
    fn test_user_message_for_parse_failure_is_generic() {
        let message = AppError::api_unexpected_structure("missing field `sports`", "url")
            .user_message();
        assert_eq!(message, "Received unexpected data from the API");
    }

    #[test]
    fn test_error_from_reqwest() {
        let client = reqwest::Client::new();
        let request_result = client.get("not a valid url").build();

        match request_result {
            Err(reqwest_error) => {
                let app_error: AppError = reqwest_error.into();
                assert!(matches!(app_error, AppError::ApiFetch(_)));
            }
            Ok(_) => panic!("Expected an error from invalid URL"),
        }
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let app_error: AppError = io_error.into();
        assert!(matches!(app_error, AppError::Io(_)));
    }

    #[test]
    fn test_error_from_toml_deserialize() {
        let invalid_toml = "invalid = [toml";
        let toml_error = toml::from_str::<serde_json::Value>(invalid_toml).unwrap_err();
        let app_error: AppError = toml_error.into();
        assert!(matches!(app_error, AppError::TomlDeserialize(_)));
    }
}
