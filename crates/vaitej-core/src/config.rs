use crate::app_config::{AppConfig, Environment};
use crate::scoring::{DEFAULT_MATCH_THRESHOLD, MAX_SCORE};
use crate::ConfigError;

const DEFAULT_MATCH_LIST_LIMIT: &str = "10";
const MAX_MATCH_LIST_LIMIT: i64 = 100;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it from a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        or_default(var, default)
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_bounded_i64 =
        |var: &str, default: &str, min: i64, max: i64| -> Result<i64, ConfigError> {
            let value = or_default(var, default)
                .parse::<i64>()
                .map_err(|e| invalid(var, e.to_string()))?;
            if (min..=max).contains(&value) {
                Ok(value)
            } else {
                Err(invalid(var, format!("must be between {min} and {max}")))
            }
        };

    let database_url = require("DATABASE_URL")?;
    let env = parse_environment(&or_default("VAITEJ_ENV", "development"))?;
    let log_level = or_default("VAITEJ_LOG_LEVEL", "info");
    let profiles_path = PathBuf::from(or_default(
        "VAITEJ_PROFILES_PATH",
        "./config/profiles.yaml",
    ));

    let db_max_connections = parse_u32("VAITEJ_DB_MAX_CONNECTIONS", "10")?;
    let db_min_connections = parse_u32("VAITEJ_DB_MIN_CONNECTIONS", "1")?;
    let db_acquire_timeout_secs = parse_u64("VAITEJ_DB_ACQUIRE_TIMEOUT_SECS", "10")?;

    let match_threshold = parse_bounded_i64(
        "VAITEJ_MATCH_THRESHOLD",
        &DEFAULT_MATCH_THRESHOLD.to_string(),
        0,
        i64::from(MAX_SCORE),
    )?;
    let match_list_limit = parse_bounded_i64(
        "VAITEJ_MATCH_LIST_LIMIT",
        DEFAULT_MATCH_LIST_LIMIT,
        1,
        MAX_MATCH_LIST_LIMIT,
    )?;

    Ok(AppConfig {
        database_url,
        env,
        log_level,
        profiles_path,
        db_max_connections,
        db_min_connections,
        db_acquire_timeout_secs,
        // bounded to 0..=MAX_SCORE above
        match_threshold: i32::try_from(match_threshold).unwrap_or(DEFAULT_MATCH_THRESHOLD),
        match_list_limit,
    })
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidEnvVar`] for anything other than
/// `development`, `test` or `production`.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "VAITEJ_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
