//! The five storage operations every resource exposes.

use crate::error::AppError;
use crate::service::validation::Validate;
use async_trait::async_trait;
use serde::Serialize;
use sqlx::SqliteConnection;

/// One resource's data access. Every call is a single statement on the caller's session,
/// and every mutation returns the row as stored (`RETURNING`), never the input echoed back.
///
/// "Not found" is a value (`None` / `false`), not an error: the router decides what that means.
#[async_trait]
pub trait Repository: Send + Sync + 'static {
    /// Resource name used in not-found messages, e.g. "User".
    const NAME: &'static str;

    type Payload: Validate + Send + 'static;
    type Entity: Serialize + Send + 'static;

    /// All rows in ascending id order. Empty is not an error.
    async fn list(conn: &mut SqliteConnection) -> Result<Vec<Self::Entity>, AppError>;

    async fn create(
        conn: &mut SqliteConnection,
        payload: Self::Payload,
    ) -> Result<Self::Entity, AppError>;

    async fn get(conn: &mut SqliteConnection, id: i64) -> Result<Option<Self::Entity>, AppError>;

    /// Full replacement of the mutable payload.
    async fn update(
        conn: &mut SqliteConnection,
        id: i64,
        payload: Self::Payload,
    ) -> Result<Option<Self::Entity>, AppError>;

    /// `true` if a row was removed.
    async fn delete(conn: &mut SqliteConnection, id: i64) -> Result<bool, AppError>;
}
