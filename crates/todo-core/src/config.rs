//! Process configuration from environment variables.
//!
//! | Variable | Values | Default |
//! |---|---|---|
//! | `TODO_FUNCTION` | registered function name | unset |
//! | `TODO_STORE` | `mock`, `memory` | `mock` |
//! | `TODO_LOG_FORMAT` | `pretty`, `json` | `pretty` |
//!
//! Log filtering itself is `RUST_LOG` (see [`crate::logging`]).

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub const ENV_FUNCTION: &str = "TODO_FUNCTION";
pub const ENV_STORE: &str = "TODO_STORE";
pub const ENV_LOG_FORMAT: &str = "TODO_LOG_FORMAT";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}' (expected one of: {expected})")]
    InvalidValue {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Which task store backs the functions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StoreKind {
    /// Stores nothing; resolves one known task.
    #[default]
    Mock,
    /// Keeps added tasks for the life of the process.
    Memory,
}

impl StoreKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mock => "mock",
            Self::Memory => "memory",
        }
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StoreKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mock" => Ok(Self::Mock),
            "memory" => Ok(Self::Memory),
            _ => Err(ConfigError::InvalidValue {
                key: ENV_STORE,
                value: s.to_string(),
                expected: "mock, memory",
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidValue {
                key: ENV_LOG_FORMAT,
                value: s.to_string(),
                expected: "pretty, json",
            }),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub function: Option<String>,
    pub store: StoreKind,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Self {
            function: get(ENV_FUNCTION),
            store: get(ENV_STORE)
                .map(|v| v.parse::<StoreKind>())
                .transpose()?
                .unwrap_or_default(),
            log_format: get(ENV_LOG_FORMAT)
                .map(|v| v.parse::<LogFormat>())
                .transpose()?
                .unwrap_or_default(),
        })
    }
}
