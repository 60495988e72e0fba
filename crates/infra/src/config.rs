//! Process configuration from the environment.

use thiserror::Error;

/// Listening port used when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("MONGODB_URI is not set")]
    MissingUri,

    #[error("PORT is not a valid port number: {0}")]
    InvalidPort(String),
}

/// Startup configuration.
///
/// The connection string is required; the listening port falls back to
/// [`DEFAULT_PORT`] when unset.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub mongodb_uri: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            std::env::var("MONGODB_URI").ok(),
            std::env::var("PORT").ok(),
        )
    }

    fn from_vars(uri: Option<String>, port: Option<String>) -> Result<Self, ConfigError> {
        let mongodb_uri = uri.ok_or(ConfigError::MissingUri)?;
        let port = match port {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Self { mongodb_uri, port })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uri_is_required() {
        let err = AppConfig::from_vars(None, None).unwrap_err();
        assert_eq!(err, ConfigError::MissingUri);
    }

    #[test]
    fn port_defaults_when_unset() {
        let config =
            AppConfig::from_vars(Some("mongodb://localhost:27017".to_string()), None).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn explicit_port_is_parsed() {
        let config = AppConfig::from_vars(
            Some("mongodb://localhost:27017".to_string()),
            Some("8080".to_string()),
        )
        .unwrap();
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn malformed_port_is_rejected() {
        let err = AppConfig::from_vars(
            Some("mongodb://localhost:27017".to_string()),
            Some("not-a-port".to_string()),
        )
        .unwrap_err();
        assert_eq!(err, ConfigError::InvalidPort("not-a-port".to_string()));
    }
}
