use std::{env, fmt::Display, str::FromStr};

use tracing::info;

/// Process configuration, loaded once at startup from environment
/// variables with sensible defaults for local development.
pub struct Config {
    pub bind_addr: String,
    pub db_path: String,
    pub schema_path: String,
}

impl Config {
    pub fn load() -> Self {
        Self {
            bind_addr: try_load("HH_BIND_ADDR", "127.0.0.1:3000"),
            db_path: try_load("HH_DB_PATH", "husky_haggles.sqlite3"),
            schema_path: try_load("HH_SCHEMA_PATH", "sql/schema.sql"),
        }
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    let raw = env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    match raw.parse() {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!("invalid {key} value {raw:?} ({e}), using default: {default}");
            default
                .parse()
                .unwrap_or_else(|e| panic!("default for {key} is invalid: {e}"))
        }
    }
}
