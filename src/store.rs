//! Pool construction and table bootstrap for the `users` and `partners` tables.

use crate::error::AppError;
use crate::settings::Settings;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

const USERS_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        status TEXT NOT NULL CHECK (status IN ('active', 'inactive'))
    )
"#;

const PARTNERS_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS partners (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        data TEXT NOT NULL
    )
"#;

/// True for `sqlite::memory:` and `mode=memory` URLs.
pub fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

fn connect_options(database_url: &str) -> Result<SqliteConnectOptions, AppError> {
    Ok(SqliteConnectOptions::from_str(database_url)?.create_if_missing(true))
}

/// Ensure the database file in `database_url` exists; create it if not. No-op for in-memory URLs.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    if is_in_memory(database_url) {
        return Ok(());
    }
    let opts = connect_options(database_url)?;
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(opts)
        .await?;
    pool.close().await;
    Ok(())
}

/// Open the pool. In-memory databases live and die with their connection, so they get
/// exactly one that never idles out.
pub async fn connect(settings: &Settings) -> Result<SqlitePool, AppError> {
    let opts = connect_options(&settings.database_url)?;
    let pool = if is_in_memory(&settings.database_url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(opts)
            .await?
    } else {
        SqlitePoolOptions::new()
            .max_connections(settings.max_connections.max(1))
            .connect_with(opts)
            .await?
    };
    Ok(pool)
}

/// Create `users` and `partners` if absent. Safe to run on every start.
pub async fn ensure_tables(pool: &SqlitePool) -> Result<(), AppError> {
    for ddl in [USERS_DDL, PARTNERS_DDL] {
        sqlx::query(ddl).execute(pool).await?;
    }
    tracing::debug!("tables ensured");
    Ok(())
}
