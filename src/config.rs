//! Client and host configuration.
//!
//! The browser bundle reads its settings at build time (`option_env!`), the
//! host process reads its own from the process environment at startup.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "/api";
pub const DEFAULT_SESSION_KEY: &str = "library_console_session";
pub const DEFAULT_NOTICE_TTL_MS: u32 = 3000;
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown response contract '{0}' (expected 'bare' or 'enveloped')")]
    UnknownContract(String),
    #[error("invalid value for {var}: {value}")]
    InvalidValue { var: &'static str, value: String },
}

/// Which server response convention the gateway unwraps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResponseContract {
    /// The body is the payload.
    #[default]
    Bare,
    /// The body is `{ success, code, message, data }`.
    Enveloped,
}

impl ResponseContract {
    pub fn parse(raw: Option<&str>) -> Result<Self, ConfigError> {
        match raw.map(str::trim).unwrap_or("bare") {
            "" | "bare" => Ok(Self::Bare),
            "enveloped" => Ok(Self::Enveloped),
            other => Err(ConfigError::UnknownContract(other.to_owned())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub storage_key: String,
    pub response_contract: ResponseContract,
    pub notice_ttl_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            storage_key: DEFAULT_SESSION_KEY.to_owned(),
            response_contract: ResponseContract::Bare,
            notice_ttl_ms: DEFAULT_NOTICE_TTL_MS,
        }
    }
}

impl ClientConfig {
    /// Settings baked in at compile time.
    ///
    /// - `LIBRARY_API_BASE_URL`: default `/api`
    /// - `LIBRARY_API_CONTRACT`: `bare` (default) or `enveloped`
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("LIBRARY_API_BASE_URL"), option_env!("LIBRARY_API_CONTRACT"))
    }

    fn from_values(base_url: Option<&str>, contract: Option<&str>) -> Self {
        let response_contract = ResponseContract::parse(contract).unwrap_or_else(|e| {
            leptos::logging::warn!("{e}; falling back to bare responses");
            ResponseContract::Bare
        });
        let api_base_url = base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        Self { api_base_url, response_contract, ..Self::default() }
    }
}

/// Host process settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Backend origin that `/api/*` is forwarded to. `None` disables the proxy.
    pub api_upstream: Option<String>,
    pub proxy_timeout_secs: u64,
}

impl ServerConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `LIBRARY_API_UPSTREAM`: backend origin, proxy disabled when absent
    /// - `LIBRARY_PROXY_TIMEOUT_SECS`: default 30
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let api_upstream = lookup("LIBRARY_API_UPSTREAM")
            .map(|url| url.trim().trim_end_matches('/').to_owned())
            .filter(|url| !url.is_empty());
        let proxy_timeout_secs =
            parse_or("LIBRARY_PROXY_TIMEOUT_SECS", lookup("LIBRARY_PROXY_TIMEOUT_SECS"), DEFAULT_PROXY_TIMEOUT_SECS)?;
        Ok(Self { port, api_upstream, proxy_timeout_secs })
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidValue { var, value }),
    }
}
