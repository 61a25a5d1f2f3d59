//! `users` table access.

use crate::error::{AppError, ValidationError};
use crate::model::{User, UserIn, UserStatus};
use crate::service::repository::Repository;
use async_trait::async_trait;
use sqlx::SqliteConnection;

pub struct UserRepository;

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    status: String,
}

impl TryFrom<UserRow> for User {
    type Error = AppError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let status: UserStatus = row
            .status
            .parse()
            .map_err(|e: ValidationError| AppError::Db(sqlx::Error::Decode(Box::new(e))))?;
        Ok(User { id: row.id, status })
    }
}

fn into_user(row: Option<UserRow>) -> Result<Option<User>, AppError> {
    row.map(User::try_from).transpose()
}

#[async_trait]
impl Repository for UserRepository {
    const NAME: &'static str = "User";

    type Payload = UserIn;
    type Entity = User;

    async fn list(conn: &mut SqliteConnection) -> Result<Vec<User>, AppError> {
        tracing::debug!("listing users");
        let rows: Vec<UserRow> = sqlx::query_as("SELECT id, status FROM users ORDER BY id")
            .fetch_all(&mut *conn)
            .await?;
        rows.into_iter().map(User::try_from).collect()
    }

    async fn create(conn: &mut SqliteConnection, payload: UserIn) -> Result<User, AppError> {
        let row: UserRow =
            sqlx::query_as("INSERT INTO users (status) VALUES (?) RETURNING id, status")
                .bind(payload.status.as_str())
                .fetch_one(&mut *conn)
                .await?;
        let user = User::try_from(row)?;
        tracing::info!(id = user.id, status = %user.status, "user created");
        Ok(user)
    }

    async fn get(conn: &mut SqliteConnection, id: i64) -> Result<Option<User>, AppError> {
        tracing::debug!(id, "fetching user");
        let row: Option<UserRow> = sqlx::query_as("SELECT id, status FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        into_user(row)
    }

    async fn update(
        conn: &mut SqliteConnection,
        id: i64,
        payload: UserIn,
    ) -> Result<Option<User>, AppError> {
        let row: Option<UserRow> =
            sqlx::query_as("UPDATE users SET status = ? WHERE id = ? RETURNING id, status")
                .bind(payload.status.as_str())
                .bind(id)
                .fetch_optional(&mut *conn)
                .await?;
        let user = into_user(row)?;
        if user.is_some() {
            tracing::info!(id, status = %payload.status, "user replaced");
        }
        Ok(user)
    }

    async fn delete(conn: &mut SqliteConnection, id: i64) -> Result<bool, AppError> {
        let done = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        let removed = done.rows_affected() > 0;
        if removed {
            tracing::info!(id, "user deleted");
        }
        Ok(removed)
    }
}
