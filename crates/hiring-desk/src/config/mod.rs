use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use chrono::NaiveDate;

use crate::workflows::posting::{
    WizardSettings, DEFAULT_COMPANY_NAME, DEFAULT_POSTING_WINDOW_MONTHS,
};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub posting: PostingConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;
        let session_idle_minutes = match env::var("APP_SESSION_IDLE_MINUTES") {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|minutes| *minutes > 0)
                .ok_or(ConfigError::InvalidSessionIdle)?,
            Err(_) => DEFAULT_SESSION_IDLE_MINUTES,
        };

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let log_format = match env::var("APP_LOG_FORMAT") {
            Ok(raw) => LogFormat::parse(&raw).ok_or(ConfigError::InvalidLogFormat(raw))?,
            Err(_) => LogFormat::Compact,
        };

        let company_name =
            env::var("APP_COMPANY_NAME").unwrap_or_else(|_| DEFAULT_COMPANY_NAME.to_string());
        let posting_window_months = match env::var("APP_POSTING_WINDOW_MONTHS") {
            Ok(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|months| *months > 0)
                .ok_or(ConfigError::InvalidPostingWindow)?,
            Err(_) => DEFAULT_POSTING_WINDOW_MONTHS,
        };
        let enforce_posting_window = match env::var("APP_ENFORCE_POSTING_WINDOW") {
            Ok(raw) => parse_flag(&raw).ok_or(ConfigError::InvalidFlag {
                name: "APP_ENFORCE_POSTING_WINDOW",
            })?,
            Err(_) => false,
        };

        Ok(Self {
            environment,
            server: ServerConfig {
                host,
                port,
                session_idle_minutes,
            },
            telemetry: TelemetryConfig {
                log_level,
                format: log_format,
            },
            posting: PostingConfig {
                company_name,
                posting_window_months,
                enforce_posting_window,
            },
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

pub const DEFAULT_SESSION_IDLE_MINUTES: u64 = 30;

/// Settings controlling the HTTP server binding and how long idle wizard sessions live.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub session_idle_minutes: u64,
}

impl ServerConfig {
    pub fn session_idle_limit(&self) -> Duration {
        Duration::from_secs(self.session_idle_minutes * 60)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" | "text" => Some(Self::Compact),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub format: LogFormat,
}

/// Company branding and expiration policy applied to every posting session.
#[derive(Debug, Clone)]
pub struct PostingConfig {
    pub company_name: String,
    pub posting_window_months: u32,
    pub enforce_posting_window: bool,
}

impl PostingConfig {
    pub fn wizard_settings(&self, opened_on: NaiveDate) -> WizardSettings {
        WizardSettings {
            opened_on,
            company_name: self.company_name.clone(),
            posting_window_months: self.posting_window_months,
            enforce_posting_window: self.enforce_posting_window,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidLogFormat(String),
    InvalidPostingWindow,
    InvalidSessionIdle,
    InvalidFlag { name: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidLogFormat(value) => {
                write!(f, "APP_LOG_FORMAT must be 'compact' or 'json' (got '{value}')")
            }
            ConfigError::InvalidPostingWindow => {
                write!(f, "APP_POSTING_WINDOW_MONTHS must be a positive whole number")
            }
            ConfigError::InvalidSessionIdle => {
                write!(f, "APP_SESSION_IDLE_MINUTES must be a positive whole number")
            }
            ConfigError::InvalidFlag { name } => {
                write!(f, "{name} must be true/false, yes/no, on/off, or 1/0")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidLogFormat(_)
            | ConfigError::InvalidPostingWindow
            | ConfigError::InvalidSessionIdle
            | ConfigError::InvalidFlag { .. } => None,
        }
    }
}
