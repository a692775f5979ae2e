//! Configuration management for news-digest.
//!
//! Configuration can be set via environment variables:
//! - `OPENROUTER_API_KEY` - Required. Your OpenRouter API key.
//! - `DIGEST_MODEL` - Optional. The chat model used for curation. Defaults to `google/gemini-2.5-pro`.
//! - `GOOGLE_API_KEY` - Required. Google API key for Custom Search.
//! - `GOOGLE_CSE_ID` - Required. Custom Search Engine ID (cx).
//! - `SMTP_EMAIL` - Required. Sender address, also used as the SMTP username.
//! - `SMTP_PASSWORD` - Required. SMTP password (app password for Gmail).
//! - `SMTP_SERVER` - Optional. SMTP relay host. Defaults to `smtp.gmail.com`.
//! - `SMTP_PORT` - Optional. SMTP relay port. Defaults to `587` (STARTTLS).
//! - `HOST` - Optional. Server host. Defaults to `127.0.0.1`.
//! - `PORT` - Optional. Server port. Defaults to `3000`.
//! - `MAX_ITERATIONS` - Optional. Maximum agent loop iterations. Defaults to `50`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

/// SMTP relay configuration.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    /// Sender address; doubles as the SMTP login username.
    pub email: String,

    /// SMTP password.
    pub password: String,

    /// Relay hostname.
    pub server: String,

    /// Relay port (STARTTLS).
    pub port: u16,
}

/// Google Custom Search configuration.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Google API key.
    pub api_key: String,

    /// Custom Search Engine ID (the `cx` parameter).
    pub cse_id: String,
}

/// Service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// OpenRouter API key
    pub api_key: String,

    /// Chat model identifier (OpenRouter format)
    pub model: String,

    /// Server host
    pub host: String,

    /// Server port
    pub port: u16,

    /// Maximum iterations for the agent loop
    pub max_iterations: usize,

    /// SMTP relay settings
    pub smtp: SmtpConfig,

    /// Custom Search settings
    pub search: SearchConfig,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingEnvVar` if any required variable is not
    /// set, or `ConfigError::InvalidValue` if a numeric variable fails to
    /// parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = require_env("OPENROUTER_API_KEY")?;

        let model = std::env::var("DIGEST_MODEL")
            .unwrap_or_else(|_| "google/gemini-2.5-pro".to_string());

        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let port = parse_env_or("PORT", 3000)?;

        let max_iterations = parse_env_or("MAX_ITERATIONS", 50)?;

        let smtp = SmtpConfig {
            email: require_env("SMTP_EMAIL")?,
            password: require_env("SMTP_PASSWORD")?,
            server: std::env::var("SMTP_SERVER")
                .unwrap_or_else(|_| "smtp.gmail.com".to_string()),
            port: parse_env_or("SMTP_PORT", 587)?,
        };

        let search = SearchConfig {
            api_key: require_env("GOOGLE_API_KEY")?,
            cse_id: require_env("GOOGLE_CSE_ID")?,
        };

        Ok(Self {
            api_key,
            model,
            host,
            port,
            max_iterations,
            smtp,
            search,
        })
    }

    /// Create a config with custom values (useful for testing).
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            api_key,
            model,
            host: "127.0.0.1".to_string(),
            port: 3000,
            max_iterations: 50,
            smtp: SmtpConfig {
                email: "sender@example.com".to_string(),
                password: "secret".to_string(),
                server: "smtp.gmail.com".to_string(),
                port: 587,
            },
            search: SearchConfig {
                api_key: "search-key".to_string(),
                cse_id: "search-cx".to_string(),
            },
        }
    }
}

fn require_env(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn parse_env_or<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| ConfigError::InvalidValue(name.to_string(), format!("{}", e))),
        Err(_) => Ok(default),
    }
}
