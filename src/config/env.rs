// src/config/env.rs
// DOCUMENTATION: Environment variable management
// PURPOSE: Load and validate configuration from .env files

use dotenv::dotenv;
use std::env;

/// Default Kakao Local API host
pub const DEFAULT_KAKAO_BASE_URL: &str = "https://dapi.kakao.com";

/// Application configuration loaded from environment variables
/// DOCUMENTATION: Centralizes all configuration in one struct
/// Load with Config::from_env() at application startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "127.0.0.1")
    pub server_address: String,

    /// Server listen port (default 3000)
    pub server_port: u16,

    /// Environment: development, staging, production
    pub environment: String,

    /// Log level: debug, info, warn, error
    pub log_level: String,

    /// Kakao REST API key, sent as `Authorization: KakaoAK <key>`
    pub kakao_rest_api_key: String,

    /// Kakao Local API base URL (overridable for tests and proxies)
    pub kakao_base_url: String,
}

impl Config {
    /// Load configuration from environment variables
    /// DOCUMENTATION: Reads from .env or process environment
    /// Called once at application startup
    pub fn from_env() -> Self {
        dotenv().ok();

        Config {
            server_address: env::var("SERVER_ADDRESS").unwrap_or_else(|_| "127.0.0.1".to_string()),

            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),

            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),

            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),

            kakao_rest_api_key: env::var("KAKAO_REST_API_KEY").unwrap_or_default(),

            kakao_base_url: env::var("KAKAO_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_KAKAO_BASE_URL.to_string()),
        }
    }

    /// Validate critical configuration
    /// DOCUMENTATION: Ensures application can start safely
    pub fn validate(&self) -> Result<(), String> {
        if self.server_port == 0 {
            return Err("SERVER_PORT must be a non-zero port".to_string());
        }

        if self.kakao_base_url.is_empty() {
            return Err("KAKAO_API_BASE_URL must not be empty".to_string());
        }

        if self.kakao_rest_api_key.is_empty() {
            log::warn!("KAKAO_REST_API_KEY not configured - place lookups will fail");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> Config {
        Config {
            server_address: "127.0.0.1".to_string(),
            server_port: 3000,
            environment: "test".to_string(),
            log_level: "debug".to_string(),
            kakao_rest_api_key: String::new(),
            kakao_base_url: DEFAULT_KAKAO_BASE_URL.to_string(),
        }
    }

    #[test]
    fn test_missing_api_key_is_not_fatal() {
        assert!(sample_config().validate().is_ok());
    }

    #[test]
    fn test_zero_port_rejected() {
        let mut config = sample_config();
        config.server_port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_base_url_rejected() {
        let mut config = sample_config();
        config.kakao_base_url = String::new();
        assert!(config.validate().is_err());
    }
}
