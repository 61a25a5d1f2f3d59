//! Process settings from environment variables (`.env` is loaded by the binary).

use std::str::FromStr;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://crud.db";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 1024 * 1024;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// `DATABASE_URL`. `sqlite::memory:` keeps everything in one in-process connection.
    pub database_url: String,
    /// `BIND_ADDR`.
    pub bind_addr: String,
    /// `DB_MAX_CONNECTIONS`. Ignored for in-memory databases.
    pub max_connections: u32,
    /// `BODY_LIMIT_BYTES`.
    pub body_limit_bytes: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            database_url: DEFAULT_DATABASE_URL.into(),
            bind_addr: DEFAULT_BIND_ADDR.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup; unset keys take defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Settings::default();
        Settings {
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            bind_addr: lookup("BIND_ADDR").unwrap_or(defaults.bind_addr),
            max_connections: parse_or(
                "DB_MAX_CONNECTIONS",
                lookup("DB_MAX_CONNECTIONS"),
                defaults.max_connections,
            ),
            body_limit_bytes: parse_or(
                "BODY_LIMIT_BYTES",
                lookup("BODY_LIMIT_BYTES"),
                defaults.body_limit_bytes,
            ),
        }
    }

    pub fn in_memory() -> Self {
        Settings {
            database_url: "sqlite::memory:".into(),
            ..Settings::default()
        }
    }
}

fn parse_or<T: FromStr + Copy>(key: &str, raw: Option<String>, default: T) -> T {
    match raw {
        None => default,
        Some(s) => s.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %s, "unparseable setting, using default");
            default
        }),
    }
}
