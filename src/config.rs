// src/config.rs
use std::env;
use thiserror::Error;

use crate::application::{
    queries::recommendations::RecommendationLimits, services::ServiceSettings,
};
use crate::domain::article::services::{DEFAULT_CANDIDATE_FACTOR, DEFAULT_MAX_SLUG_ATTEMPTS};

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    default_limit: u32,
    max_limit: u32,
    candidate_factor: u32,
    slug_max_attempts: u32,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://blog.db?mode=rwc".into()
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(default_database_url);
        if database_url.trim().is_empty() {
            return Err(ConfigError::Missing("DATABASE_URL"));
        }

        let settings = ServiceSettings::default();
        let default_limit = parse_u32(
            &lookup,
            "RECOMMENDATION_DEFAULT_LIMIT",
            settings.limits.default_limit,
        )?;
        let max_limit = parse_positive(&lookup, "RECOMMENDATION_MAX_LIMIT", settings.limits.max_limit)?;
        let candidate_factor =
            parse_positive(&lookup, "RECOMMENDATION_CANDIDATE_FACTOR", DEFAULT_CANDIDATE_FACTOR)?;
        let slug_max_attempts =
            parse_positive(&lookup, "SLUG_MAX_ATTEMPTS", DEFAULT_MAX_SLUG_ATTEMPTS)?;

        if default_limit > max_limit {
            return Err(ConfigError::Invalid(format!(
                "RECOMMENDATION_DEFAULT_LIMIT ({default_limit}) exceeds RECOMMENDATION_MAX_LIMIT ({max_limit})"
            )));
        }

        Ok(Self {
            database_url,
            default_limit,
            max_limit,
            candidate_factor,
            slug_max_attempts,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn service_settings(&self) -> ServiceSettings {
        ServiceSettings {
            slug_max_attempts: self.slug_max_attempts,
            candidate_factor: self.candidate_factor,
            limits: RecommendationLimits {
                default_limit: self.default_limit,
                max_limit: self.max_limit,
            },
        }
    }
}

fn parse_u32<F>(lookup: &F, key: &'static str, default: u32) -> Result<u32, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<u32>()
            .map_err(|_| ConfigError::Invalid(format!("{key} must be a non-negative integer"))),
        None => Ok(default),
    }
}

fn parse_positive<F>(lookup: &F, key: &'static str, default: u32) -> Result<u32, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let value = parse_u32(lookup, key, default)?;
    if value == 0 {
        return Err(ConfigError::Invalid(format!("{key} must be greater than zero")));
    }
    Ok(value)
}
