//! # Server Configuration
//!
//! Configuration is parsed once at process start (flags, with environment
//! variable fallbacks) into an [`AppConfig`] that is then injected into the
//! application state. Nothing reads the environment after startup.
//!
//! | Flag | Env | Default |
//! |------|-----|---------|
//! | `--host` | `API_HOST` | `0.0.0.0` |
//! | `--port` | `API_PORT` | `5000` |
//! | `--api-key` | `API_KEY` | `test-api-key` |
//! | `--secret-key` | `SECRET_KEY` | `dev-secret-key` |
//! | `--log-level` | `LOG_LEVEL` | `info` |
//! | `--environment` | `APP_ENV` | `development` |
//! | `--debug` | `APP_DEBUG` | `true` in development, `false` in production |

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::{Parser, ValueEnum};
use zeroize::Zeroizing;

/// Deployment environment; selects log format and the debug default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

/// Command-line arguments for the `polis-api` binary.
#[derive(Debug, Parser)]
#[command(
    name = "polis-api",
    version,
    about = "Insurance policy information API"
)]
pub struct ServerArgs {
    /// Address to bind.
    #[arg(
        long,
        env = "API_HOST",
        default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED)
    )]
    pub host: IpAddr,

    /// Port to bind.
    #[arg(long, env = "API_PORT", default_value_t = 5000)]
    pub port: u16,

    /// Shared API key expected in the `X-API-Key` header.
    #[arg(
        long,
        env = "API_KEY",
        default_value = "test-api-key",
        hide_env_values = true
    )]
    pub api_key: String,

    /// Application secret. Salts credential fingerprints written to logs.
    #[arg(
        long,
        env = "SECRET_KEY",
        default_value = "dev-secret-key",
        hide_env_values = true
    )]
    pub secret_key: String,

    /// Default log filter when `RUST_LOG` is unset.
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Deployment environment.
    #[arg(
        long,
        env = "APP_ENV",
        value_enum,
        default_value_t = Environment::Development
    )]
    pub environment: Environment,

    /// Debug mode (`true`/`false`); defaults by environment.
    #[arg(long, env = "APP_DEBUG", value_parser = parse_flag)]
    pub debug: Option<bool>,
}

impl ServerArgs {
    /// Resolve defaults that depend on other arguments.
    pub fn into_config(self) -> AppConfig {
        let debug = self
            .debug
            .unwrap_or(self.environment == Environment::Development);
        AppConfig {
            host: self.host,
            port: self.port,
            api_key: Zeroizing::new(self.api_key),
            secret_key: Zeroizing::new(self.secret_key),
            log_level: self.log_level,
            environment: self.environment,
            debug,
        }
    }
}

/// Case-insensitive boolean: `true/false`, `1/0`, `yes/no`, `on/off`.
fn parse_flag(raw: &str) -> Result<bool, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(format!("expected true or false, got '{other}'")),
    }
}

/// Application configuration.
///
/// Custom `Debug` redacts the secrets to prevent credential leakage in logs.
#[derive(Clone)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Shared API key for protected routes.
    pub api_key: Zeroizing<String>,
    /// Application secret.
    pub secret_key: Zeroizing<String>,
    pub log_level: String,
    pub environment: Environment,
    pub debug: bool,
}

impl AppConfig {
    /// Socket address to bind the HTTP server to.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Replace the API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Zeroizing::new(api_key.into());
        self
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("api_key", &"[REDACTED]")
            .field("secret_key", &"[REDACTED]")
            .field("log_level", &self.log_level)
            .field("environment", &self.environment)
            .field("debug", &self.debug)
            .finish()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 5000,
            api_key: Zeroizing::new("test-api-key".to_string()),
            secret_key: Zeroizing::new("dev-secret-key".to_string()),
            log_level: "info".to_string(),
            environment: Environment::Development,
            debug: true,
        }
    }
}
