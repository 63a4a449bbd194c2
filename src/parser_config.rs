//! # Parser Configuration Module
//!
//! This module defines configuration for item parsing: the default
//! expiration horizon, the optional AI parsing service, and the circuit
//! breaker that guards it.

use anyhow::{ensure, Context, Result};
use std::env;
use std::str::FromStr;
use tracing::warn;

// Constants for parser configuration
pub const DEFAULT_EXPIRATION_DAYS: u32 = 30;
pub const MAX_DEFAULT_EXPIRATION_DAYS: u32 = 3650; // 10 years
pub const DEFAULT_BREAKER_THRESHOLD: u32 = 5;
pub const DEFAULT_BREAKER_RESET_SECS: u64 = 60; // 1 minute

// Environment variables read by `ParserConfig::from_env`
pub const ENV_DEFAULT_EXPIRATION_DAYS: &str = "FROSTIE_DEFAULT_EXPIRATION_DAYS";
pub const ENV_AI_PARSE_URL: &str = "FROSTIE_AI_PARSE_URL";
pub const ENV_AI_API_KEY: &str = "FROSTIE_AI_API_KEY";
pub const ENV_BREAKER_THRESHOLD: &str = "FROSTIE_AI_BREAKER_THRESHOLD";
pub const ENV_BREAKER_RESET_SECS: &str = "FROSTIE_AI_BREAKER_RESET_SECS";

/// Recovery configuration for the AI service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecoveryConfig {
    /// Consecutive failures before the breaker opens
    pub circuit_breaker_threshold: u32,
    /// Seconds the breaker stays open before trying again
    pub circuit_breaker_reset_secs: u64,
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        Self {
            circuit_breaker_threshold: DEFAULT_BREAKER_THRESHOLD,
            circuit_breaker_reset_secs: DEFAULT_BREAKER_RESET_SECS,
        }
    }
}

/// Connection settings for the AI text-parsing service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AiServiceConfig {
    /// Full URL of the parsing endpoint
    pub endpoint: String,
    /// Bearer token sent with each request, if any
    pub api_key: Option<String>,
}

impl AiServiceConfig {
    /// Service at `endpoint` without credentials
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            api_key: None,
        }
    }

    /// Attach a bearer token
    pub fn with_api_key(mut self, api_key: &str) -> Self {
        self.api_key = Some(api_key.to_string());
        self
    }
}

/// Configuration structure for item parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Days until expiration when neither the text nor FoodKeeper says otherwise
    pub default_expiration_days: u32,
    /// AI parsing service; `None` means the deterministic parser only
    pub ai: Option<AiServiceConfig>,
    /// Circuit breaker settings for the AI service
    pub recovery: RecoveryConfig,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            default_expiration_days: DEFAULT_EXPIRATION_DAYS,
            ai: None,
            recovery: RecoveryConfig::default(),
        }
    }
}

impl ParserConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ParserConfig::default();

        let ai = lookup(ENV_AI_PARSE_URL)
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .map(|url| {
                let config = AiServiceConfig::new(&url);
                match lookup(ENV_AI_API_KEY).filter(|key| !key.trim().is_empty()) {
                    Some(key) => config.with_api_key(key.trim()),
                    None => config,
                }
            });

        Self {
            default_expiration_days: read_with_or_default(
                &lookup,
                ENV_DEFAULT_EXPIRATION_DAYS,
                defaults.default_expiration_days,
                parse_expiration_days,
            ),
            ai,
            recovery: RecoveryConfig {
                circuit_breaker_threshold: read_or_default(
                    &lookup,
                    ENV_BREAKER_THRESHOLD,
                    defaults.recovery.circuit_breaker_threshold,
                ),
                circuit_breaker_reset_secs: read_or_default(
                    &lookup,
                    ENV_BREAKER_RESET_SECS,
                    defaults.recovery.circuit_breaker_reset_secs,
                ),
            },
        }
    }
}

/// Parse one environment value
fn parse_value<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse::<T>()
        .with_context(|| format!("Invalid value for {key}: '{raw}'"))
}

/// Default expiration horizon, limited to `1..=MAX_DEFAULT_EXPIRATION_DAYS`
fn parse_expiration_days(raw: &str) -> Result<u32> {
    let days: u32 = parse_value(ENV_DEFAULT_EXPIRATION_DAYS, raw)?;
    ensure!(
        (1..=MAX_DEFAULT_EXPIRATION_DAYS).contains(&days),
        "{ENV_DEFAULT_EXPIRATION_DAYS} must be between 1 and {MAX_DEFAULT_EXPIRATION_DAYS}, got {days}"
    );
    Ok(days)
}

/// Read and parse a value, logging and using `default` when it is unusable
fn read_or_default<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    read_with_or_default(lookup, key, default, |raw| parse_value(key, raw))
}

/// Read a value through `parse`, logging and using `default` when it is unusable
fn read_with_or_default<T, F, P>(lookup: &F, key: &str, default: T, parse: P) -> T
where
    F: Fn(&str) -> Option<String>,
    P: Fn(&str) -> Result<T>,
{
    match lookup(key) {
        Some(raw) => parse(&raw).unwrap_or_else(|e| {
            warn!(error = %e, "Falling back to default configuration value");
            default
        }),
        None => default,
    }
}
