//! Per-request storage session.

use crate::error::AppError;
use crate::state::AppState;
use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};
use sqlx::pool::PoolConnection;
use sqlx::{Sqlite, SqliteConnection};
use std::ops::{Deref, DerefMut};

/// A pooled connection held for the lifetime of one handler call.
/// Dropping it (on any exit path) hands the connection back to the pool.
pub struct DbSession(pub PoolConnection<Sqlite>);

impl DbSession {
    /// Handlers that read a body call this once the body is in, so no connection
    /// sits idle while a slow upload streams.
    pub async fn open(state: &AppState) -> Result<Self, AppError> {
        let conn = state.pool.acquire().await?;
        Ok(DbSession(conn))
    }
}

#[async_trait]
impl FromRequestParts<AppState> for DbSession {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        DbSession::open(state).await
    }
}

impl Deref for DbSession {
    type Target = SqliteConnection;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for DbSession {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
