//! Configuration management for Wire-Driver

use crate::{Error, Result};
use serde::Deserialize;
use std::env;
use std::time::Duration;

/// Client configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base address of the wire protocol server (e.g. "http://localhost:4444/wd/hub/")
    pub server_url: String,

    /// Timeout for a whole request in milliseconds
    pub request_timeout: u64,

    /// Timeout for establishing a connection in milliseconds
    pub connect_timeout: u64,

    /// Browser requested in the desired capabilities
    pub browser_name: String,

    /// Implicit wait applied right after the session is created, in milliseconds
    pub implicit_wait: Option<u64>,

    /// Log level
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:4444/wd/hub/".to_string(),
            request_timeout: 60000,
            connect_timeout: 10000,
            browser_name: "firefox".to_string(),
            implicit_wait: None,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::default().overlay_env()
    }

    /// Apply `WIRE_*` environment variables on top of this configuration
    pub fn overlay_env(mut self) -> Result<Self> {
        if let Ok(server_url) = env::var("WIRE_SERVER_URL") {
            self.server_url = server_url;
        }

        if let Ok(timeout) = env::var("WIRE_REQUEST_TIMEOUT") {
            self.request_timeout = timeout
                .parse()
                .map_err(|_| Error::configuration("Invalid WIRE_REQUEST_TIMEOUT"))?;
        }

        if let Ok(timeout) = env::var("WIRE_CONNECT_TIMEOUT") {
            self.connect_timeout = timeout
                .parse()
                .map_err(|_| Error::configuration("Invalid WIRE_CONNECT_TIMEOUT"))?;
        }

        if let Ok(browser) = env::var("WIRE_BROWSER") {
            self.browser_name = browser;
        }

        if let Ok(wait) = env::var("WIRE_IMPLICIT_WAIT") {
            self.implicit_wait = Some(
                wait.parse()
                    .map_err(|_| Error::configuration("Invalid WIRE_IMPLICIT_WAIT"))?,
            );
        }

        if let Ok(log_level) = env::var("WIRE_LOG_LEVEL") {
            self.log_level = log_level;
        }

        Ok(self)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::configuration(format!("Failed to read config file: {}", e)))?;

        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text; missing keys take their defaults
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| Error::configuration(format!("Failed to parse config: {}", e)))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server_url, "http://localhost:4444/wd/hub/");
        assert_eq!(config.browser_name, "firefox");
        assert_eq!(config.request_timeout(), Duration::from_secs(60));
        assert!(config.implicit_wait.is_none());
    }

    #[test]
    fn test_from_toml_partial() {
        let config = Config::from_toml(
            r#"
            server_url = "http://grid.internal:4444/wd/hub/"
            browser_name = "chrome"
            implicit_wait = 2500
            "#,
        )
        .unwrap();

        assert_eq!(config.server_url, "http://grid.internal:4444/wd/hub/");
        assert_eq!(config.browser_name, "chrome");
        assert_eq!(config.implicit_wait, Some(2500));
        assert_eq!(config.connect_timeout, 10000);
    }

    #[test]
    fn test_from_toml_rejects_bad_types() {
        let err = Config::from_toml("request_timeout = \"soon\"").unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    // Env vars are process-global, so every overlay case lives in this one test
    #[test]
    fn test_env_overlay() {
        const VARS: [&str; 4] = [
            "WIRE_SERVER_URL",
            "WIRE_IMPLICIT_WAIT",
            "WIRE_BROWSER",
            "WIRE_REQUEST_TIMEOUT",
        ];

        env::set_var("WIRE_SERVER_URL", "http://grid.internal:4444/wd/hub/");
        env::set_var("WIRE_IMPLICIT_WAIT", "1500");
        env::set_var("WIRE_BROWSER", "chrome");
        let config = Config::from_env();
        let from_toml = Config::from_toml("browser_name = \"safari\"\nconnect_timeout = 500")
            .and_then(Config::overlay_env);

        env::set_var("WIRE_REQUEST_TIMEOUT", "soon");
        let invalid = Config::from_env();

        for var in VARS {
            env::remove_var(var);
        }

        let config = config.unwrap();
        assert_eq!(config.server_url, "http://grid.internal:4444/wd/hub/");
        assert_eq!(config.implicit_wait, Some(1500));
        assert_eq!(config.browser_name, "chrome");
        assert_eq!(config.request_timeout, 60000);

        // File values survive unless a variable overrides them
        let from_toml = from_toml.unwrap();
        assert_eq!(from_toml.browser_name, "chrome");
        assert_eq!(from_toml.connect_timeout, 500);

        match invalid {
            Err(Error::Configuration(msg)) => assert!(msg.contains("WIRE_REQUEST_TIMEOUT")),
            other => panic!("expected a configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_file_missing() {
        let err = Config::from_file("/nonexistent/wire-driver.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
