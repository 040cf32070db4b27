//! Process configuration, read once at startup

use std::fmt;
use std::net::{AddrParseError, SocketAddr};
use thiserror::Error;

use crate::llm::GeminiModel;

/// Environment variable holding the Gemini API key
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Environment variable overriding the listen address
pub const BIND_ADDR_VAR: &str = "BIND_ADDR";

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3030";

/// The model every question is sent to
pub const MODEL: GeminiModel = GeminiModel::Gemini20Flash;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} environment variable not set.")]
    MissingVar(&'static str),

    #[error("Invalid {var} '{value}': {source}")]
    InvalidAddr {
        var: &'static str,
        value: String,
        #[source]
        source: AddrParseError,
    },
}

/// An API key that never shows up in `Debug` output
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiKey([REDACTED])")
    }
}

/// Settings for one relay process
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub api_key: ApiKey,
    pub bind_addr: SocketAddr,
    pub model: GeminiModel,
}

impl RelayConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through an arbitrary variable lookup
    ///
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let api_key = get(API_KEY_VAR)
            .map(|key| ApiKey(key.trim().to_string()))
            .ok_or(ConfigError::MissingVar(API_KEY_VAR))?;

        let bind_value = get(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_value
            .trim()
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::InvalidAddr {
                var: BIND_ADDR_VAR,
                value: bind_value.clone(),
                source,
            })?;

        Ok(Self {
            api_key,
            bind_addr,
            model: MODEL,
        })
    }
}
