//! Configuration module for the RSVP service.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use crate::errors::AppError;

/// Endpoint URL value that selects demo mode.
pub const DEMO_ENDPOINT_PLACEHOLDER: &str = "YOUR_GOOGLE_APPS_SCRIPT_URL_HERE";

/// How RSVP writes treat the endpoint's reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Reply is never read; only a transport failure counts as failure.
    Opaque,
    /// Reply status and `error` field decide success.
    Checked,
}

impl FromStr for WriteMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "opaque" => Ok(WriteMode::Opaque),
            "checked" => Ok(WriteMode::Checked),
            other => Err(AppError::Config(format!(
                "Invalid RSVP_WRITE_MODE '{}': expected 'opaque' or 'checked'",
                other
            ))),
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the spreadsheet-backed RSVP store endpoint
    pub endpoint_url: String,
    /// Literal admin password, only consulted in demo mode
    pub admin_password: Option<String>,
    /// Write-path contract against the endpoint
    pub write_mode: WriteMode,
    /// Artificial delay for demo submissions
    pub demo_delay: Duration,
    /// Admin sessions unused for this long are dropped
    pub session_idle_timeout: Duration,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let endpoint_url =
            env::var("RSVP_SCRIPT_URL").unwrap_or_else(|_| DEMO_ENDPOINT_PLACEHOLDER.to_string());

        let admin_password = env::var("RSVP_ADMIN_PASSWORD")
            .ok()
            .filter(|p| !p.is_empty());

        let write_mode = env::var("RSVP_WRITE_MODE")
            .unwrap_or_else(|_| "opaque".to_string())
            .parse()?;

        let demo_delay_ms: u64 = env::var("RSVP_DEMO_DELAY_MS")
            .unwrap_or_else(|_| "1500".to_string())
            .parse()
            .map_err(|e| AppError::Config(format!("Invalid RSVP_DEMO_DELAY_MS: {}", e)))?;

        let session_idle_minutes: u64 = env::var("RSVP_SESSION_IDLE_MINUTES")
            .unwrap_or_else(|_| "480".to_string())
            .parse()
            .map_err(|e| AppError::Config(format!("Invalid RSVP_SESSION_IDLE_MINUTES: {}", e)))?;

        let bind_addr = env::var("RSVP_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .map_err(|e| AppError::Config(format!("Invalid RSVP_BIND_ADDR format: {}", e)))?;

        let log_level = env::var("RSVP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            endpoint_url,
            admin_password,
            write_mode,
            demo_delay: Duration::from_millis(demo_delay_ms),
            session_idle_timeout: Duration::from_secs(session_idle_minutes * 60),
            bind_addr,
            log_level,
        })
    }

    /// Demo mode runs without any network calls.
    pub fn is_demo(&self) -> bool {
        let url = self.endpoint_url.trim();
        url.is_empty() || url == DEMO_ENDPOINT_PLACEHOLDER
    }
}
