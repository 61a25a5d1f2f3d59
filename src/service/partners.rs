//! `partners` table access. `data` is stored as JSON text and decoded on every read.

use crate::error::AppError;
use crate::model::{Partner, PartnerIn};
use crate::service::repository::Repository;
use async_trait::async_trait;
use serde_json::{Map, Value};
use sqlx::SqliteConnection;

pub struct PartnerRepository;

#[derive(sqlx::FromRow)]
struct PartnerRow {
    id: i64,
    data: String,
}

impl TryFrom<PartnerRow> for Partner {
    type Error = AppError;

    fn try_from(row: PartnerRow) -> Result<Self, Self::Error> {
        let data: Map<String, Value> = serde_json::from_str(&row.data)?;
        Ok(Partner { id: row.id, data })
    }
}

fn encode(data: &Map<String, Value>) -> Result<String, AppError> {
    Ok(serde_json::to_string(data)?)
}

#[async_trait]
impl Repository for PartnerRepository {
    const NAME: &'static str = "Partner";

    type Payload = PartnerIn;
    type Entity = Partner;

    async fn list(conn: &mut SqliteConnection) -> Result<Vec<Partner>, AppError> {
        tracing::debug!("listing partners");
        let rows: Vec<PartnerRow> = sqlx::query_as("SELECT id, data FROM partners ORDER BY id")
            .fetch_all(&mut *conn)
            .await?;
        rows.into_iter().map(Partner::try_from).collect()
    }

    async fn create(conn: &mut SqliteConnection, payload: PartnerIn) -> Result<Partner, AppError> {
        let text = encode(&payload.data)?;
        let row: PartnerRow =
            sqlx::query_as("INSERT INTO partners (data) VALUES (?) RETURNING id, data")
                .bind(text)
                .fetch_one(&mut *conn)
                .await?;
        let partner = Partner::try_from(row)?;
        tracing::info!(id = partner.id, keys = partner.data.len(), "partner created");
        Ok(partner)
    }

    async fn get(conn: &mut SqliteConnection, id: i64) -> Result<Option<Partner>, AppError> {
        tracing::debug!(id, "fetching partner");
        let row: Option<PartnerRow> = sqlx::query_as("SELECT id, data FROM partners WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        row.map(Partner::try_from).transpose()
    }

    async fn update(
        conn: &mut SqliteConnection,
        id: i64,
        payload: PartnerIn,
    ) -> Result<Option<Partner>, AppError> {
        let text = encode(&payload.data)?;
        let row: Option<PartnerRow> =
            sqlx::query_as("UPDATE partners SET data = ? WHERE id = ? RETURNING id, data")
                .bind(text)
                .bind(id)
                .fetch_optional(&mut *conn)
                .await?;
        let partner = row.map(Partner::try_from).transpose()?;
        if partner.is_some() {
            tracing::info!(id, "partner replaced");
        }
        Ok(partner)
    }

    async fn delete(conn: &mut SqliteConnection, id: i64) -> Result<bool, AppError> {
        let done = sqlx::query("DELETE FROM partners WHERE id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        let removed = done.rows_affected() > 0;
        if removed {
            tracing::info!(id, "partner deleted");
        }
        Ok(removed)
    }
}
