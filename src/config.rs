/*
 * Responsibility
 * - Read settings from the environment (.env is loaded when present)
 * - Validate them up front; a bad value fails startup instead of a request
 * - Turn the security header settings into a PolicySet
 */
use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;

use crate::error::PolicyError;
use crate::middleware::security_headers::{
    ContentSecurityPolicy, ContentTypeOptions, Mode, PolicyBuilder, PolicySet,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(value: Option<String>) -> Self {
        match value
            .unwrap_or_else(|| "development".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
    #[error(transparent)]
    Policy(#[from] PolicyError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityHeadersConfig {
    pub mode: Mode,
    pub hsts: bool,
    pub content_type_options: Option<ContentTypeOptions>,
    pub content_security_policy: Option<ContentSecurityPolicy>,
}

impl SecurityHeadersConfig {
    pub fn policy(&self) -> PolicySet {
        let mut builder = PolicyBuilder::new(self.mode).transport_security(self.hsts);

        if let Some(option) = self.content_type_options {
            builder = builder.content_type_options(option);
        }
        if let Some(csp) = &self.content_security_policy {
            builder = builder.content_security_policy(csp.clone());
        }

        builder.build()
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,
    pub request_timeout: Duration,
    pub security_headers: SecurityHeadersConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port: u16 = match lookup("PORT") {
            Some(v) => v.trim().parse().map_err(|_| ConfigError::Invalid("PORT"))?,
            None => 3000,
        };
        let addr = SocketAddr::from(([0, 0, 0, 0], port));

        let app_env = AppEnv::parse(lookup("APP_ENV"));

        let request_timeout_seconds = match lookup("REQUEST_TIMEOUT_SECONDS") {
            Some(v) => v
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::Invalid("REQUEST_TIMEOUT_SECONDS"))?,
            None => 30,
        };

        let mode = match lookup("SECURITY_HEADERS_MODE") {
            Some(v) => v
                .parse::<Mode>()
                .map_err(|_| ConfigError::Invalid("SECURITY_HEADERS_MODE"))?,
            None => Mode::default(),
        };

        let hsts = match lookup("SECURITY_HEADERS_HSTS") {
            Some(v) => parse_flag(&v).ok_or(ConfigError::Invalid("SECURITY_HEADERS_HSTS"))?,
            None => false,
        };

        let content_type_options = lookup("SECURITY_HEADERS_CONTENT_TYPE_OPTIONS")
            .map(|v| {
                v.parse::<ContentTypeOptions>()
                    .map_err(|_| ConfigError::Invalid("SECURITY_HEADERS_CONTENT_TYPE_OPTIONS"))
            })
            .transpose()?;

        let content_security_policy = lookup("SECURITY_HEADERS_CSP")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(|v| ContentSecurityPolicy::new(&v))
            .transpose()?;

        Ok(Self {
            addr,
            app_env,
            request_timeout: Duration::from_secs(request_timeout_seconds),
            security_headers: SecurityHeadersConfig {
                mode,
                hsts,
                content_type_options,
                content_security_policy,
            },
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
