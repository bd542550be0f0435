//! Application configuration management.
//!
//! This module handles loading configuration from environment variables.
//! It uses the `envy` crate to automatically deserialize environment variables into a type-safe struct.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `SERVER_HOST` (optional): bind address, defaults to 127.0.0.1
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 8080
/// - `DOCS_DIR` (optional): directory served under `/api/docs`, defaults to `./assets`
/// - `CORS_ORIGINS` (optional): comma separated allowed origins; empty allows any origin
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_host")]
    pub server_host: String,

    #[serde(default = "default_port")]
    pub server_port: u16,

    #[serde(default = "default_docs_dir")]
    pub docs_dir: String,

    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

/// Default port if SERVER_PORT environment variable is not set.
fn default_port() -> u16 {
    8080
}

fn default_docs_dir() -> String {
    "./assets".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: default_host(),
            server_port: default_port(),
            docs_dir: default_docs_dir(),
            cors_origins: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// This method first attempts to load a `.env` file (which is optional),
    /// then reads environment variables and deserializes them into a Config struct.
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable value cannot be parsed
    /// into its expected type (e.g. a non-numeric SERVER_PORT).
    pub fn from_env() -> Result<Self, envy::Error> {
        // Try to load .env file if it exists (does nothing if not found)
        dotenvy::dotenv().ok();

        // Field names are automatically converted: server_port -> SERVER_PORT
        envy::from_env::<Config>()
    }

    /// Socket address string the server binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_variables_are_absent() {
        let vars: Vec<(String, String)> = Vec::new();
        let config: Config = envy::from_iter(vars).unwrap();

        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.docs_dir, "./assets");
        assert!(config.cors_origins.is_empty());
    }

    #[test]
    fn origins_are_split_on_commas() {
        let vars = vec![
            ("SERVER_PORT".to_string(), "9000".to_string()),
            (
                "CORS_ORIGINS".to_string(),
                "http://localhost:5173,https://shop.example.com".to_string(),
            ),
        ];
        let config: Config = envy::from_iter(vars).unwrap();

        assert_eq!(config.server_port, 9000);
        assert_eq!(
            config.cors_origins,
            vec!["http://localhost:5173", "https://shop.example.com"]
        );
    }

    #[test]
    fn non_numeric_port_is_rejected() {
        let vars = vec![("SERVER_PORT".to_string(), "http".to_string())];
        assert!(envy::from_iter::<_, Config>(vars).is_err());
    }
}
