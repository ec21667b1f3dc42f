use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub token_ttl_hours: i64,
    /// Allowed CORS origin; any origin is allowed when unset.
    pub cors_allow_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let token_ttl_hours = match lookup("TOKEN_TTL_HOURS") {
            Some(value) => parse_ttl_hours(&value)?,
            None => DEFAULT_TOKEN_TTL_HOURS,
        };

        Ok(Self {
            database_url,
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            token_ttl_hours,
            cors_allow_origin: lookup("CORS_ALLOW_ORIGIN").filter(|origin| !origin.is_empty()),
        })
    }
}

fn parse_ttl_hours(value: &str) -> Result<i64, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidEnvVar {
        name: "TOKEN_TTL_HOURS".to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    };

    let hours = value
        .trim()
        .parse::<i64>()
        .map_err(|e| invalid(&e.to_string()))?;

    if hours <= 0 {
        return Err(invalid("must be a positive number of hours"));
    }

    Ok(hours)
}
