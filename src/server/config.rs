use std::{str::FromStr, time::Duration};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";
const DEFAULT_TOKEN_TTL_HOURS: u64 = 12;
/// Longest accepted token lifetime (one leap year).
const MAX_TOKEN_TTL_HOURS: u64 = 366 * 24;

pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    pub token_ttl: Duration,
    pub seed_demo_data: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let token_ttl_hours: u64 = parse_or(&lookup, "TOKEN_TTL_HOURS", DEFAULT_TOKEN_TTL_HOURS)?;
        let token_ttl = token_ttl_from_hours(token_ttl_hours)?;

        Ok(Self {
            database_url: lookup("DATABASE_URL")
                .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: lookup("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            token_ttl,
            seed_demo_data: parse_or(&lookup, "SEED_DEMO_DATA", false)?,
        })
    }
}

/// Converts the configured hours to a duration, rejecting zero and lifetimes past the cap.
fn token_ttl_from_hours(hours: u64) -> Result<Duration, ConfigError> {
    hours
        .checked_mul(60 * 60)
        .filter(|_| (1..=MAX_TOKEN_TTL_HOURS).contains(&hours))
        .map(Duration::from_secs)
        .ok_or_else(|| ConfigError::InvalidEnvVar {
            name: "TOKEN_TTL_HOURS".to_string(),
            value: hours.to_string(),
        })
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value,
            }),
    }
}
