use log::{info, warn};
use std::{env, fmt::Display, str::FromStr};

/// Connection string variables, first one set wins. `MONGODB_URL` is the name
/// existing deployments already export.
const DATABASE_KEYS: [&str; 2] = ["MONGODB_URL", "DATABASE_URL"];

/// Server settings, read once from the environment at start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    /// Registered as a valid session token at start when set.
    pub admin_token: Option<String>,
}

impl Config {
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let database_key = DATABASE_KEYS
            .into_iter()
            .find(|key| lookup(key).is_some())
            .unwrap_or("DATABASE_URL");

        Self {
            host: try_load(&lookup, "HOST", "127.0.0.1".to_string()),
            port: try_load(&lookup, "PORT", 8080),
            database_url: try_load(&lookup, database_key, "soil.sqlite".to_string()),
            admin_token: lookup("ADMIN_TOKEN").filter(|t| !t.trim().is_empty()),
        }
    }
}

fn try_load<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    let Some(raw) = lookup(key) else {
        info!("{key} not set, using default: {default}");
        return default;
    };

    raw.parse().unwrap_or_else(|e| {
        warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
        default
    })
}
