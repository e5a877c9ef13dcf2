use std::{env, time::Duration};

/// Log output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// DynamoDB table holding the bookings (default: "bookings")
    /// Note: Only used when the `dynamodb` feature is enabled.
    #[allow(dead_code)]
    pub table_name: String,
    /// Endpoint override for DynamoDB Local (default: none)
    /// Note: Only used when the `dynamodb` feature is enabled.
    #[allow(dead_code)]
    pub dynamodb_endpoint: Option<String>,
    /// Request timeout in seconds (default: 10)
    pub request_timeout_seconds: u64,
    /// Log output format (default: text)
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `BOOKING_TABLE_NAME` - DynamoDB table name (default: "bookings")
    /// - `DYNAMODB_ENDPOINT` - DynamoDB endpoint override (default: unset)
    /// - `REQUEST_TIMEOUT_SECONDS` - Request timeout in seconds (default: 10)
    /// - `LOG_FORMAT` - `text` or `json` (default: "text")
    pub fn from_env() -> Self {
        Self {
            table_name: env::var("BOOKING_TABLE_NAME").unwrap_or_else(|_| "bookings".to_string()),
            dynamodb_endpoint: env::var("DYNAMODB_ENDPOINT")
                .ok()
                .filter(|v| !v.is_empty()),
            request_timeout_seconds: env::var("REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            log_format: env::var("LOG_FORMAT")
                .map(|v| LogFormat::parse(&v))
                .unwrap_or_default(),
        }
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
