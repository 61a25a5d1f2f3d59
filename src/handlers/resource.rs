//! Resource CRUD handlers, generic over the [`Repository`] they drive.
//!
//! Each handler runs on one [`DbSession`]. Validation happens in the [`Payload`] extractor,
//! before any storage call; not-found signals from the repository become 404 here.
//! Handlers with a body open their session only after the body has been read.

use crate::error::AppError;
use crate::extractors::{DbSession, Payload, ResourceId};
use crate::response::{created, ok};
use crate::service::Repository;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse};

pub async fn list<R: Repository>(mut session: DbSession) -> Result<impl IntoResponse, AppError> {
    let rows = R::list(&mut session).await?;
    Ok(ok(rows))
}

pub async fn create<R: Repository>(
    State(state): State<AppState>,
    Payload(payload): Payload<R::Payload>,
) -> Result<impl IntoResponse, AppError> {
    let mut session = DbSession::open(&state).await?;
    let entity = R::create(&mut session, payload).await?;
    Ok(created(entity))
}

pub async fn read<R: Repository>(
    mut session: DbSession,
    ResourceId(id): ResourceId,
) -> Result<impl IntoResponse, AppError> {
    let entity = R::get(&mut session, id)
        .await?
        .ok_or_else(|| AppError::not_found(R::NAME, id))?;
    Ok(ok(entity))
}

/// PUT: a missing id is 404 whatever the body; an invalid body on an existing id is 422
/// and writes nothing.
pub async fn replace<R: Repository>(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
    payload: Result<Payload<R::Payload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let mut session = DbSession::open(&state).await?;
    let payload = match payload {
        Ok(Payload(p)) => p,
        Err(AppError::Validation(invalid)) => {
            if R::get(&mut session, id).await?.is_none() {
                return Err(AppError::not_found(R::NAME, id));
            }
            return Err(AppError::Validation(invalid));
        }
        Err(other) => return Err(other),
    };
    let entity = R::update(&mut session, id, payload)
        .await?
        .ok_or_else(|| AppError::not_found(R::NAME, id))?;
    Ok(ok(entity))
}

pub async fn delete<R: Repository>(
    mut session: DbSession,
    ResourceId(id): ResourceId,
) -> Result<impl IntoResponse, AppError> {
    if !R::delete(&mut session, id).await? {
        return Err(AppError::not_found(R::NAME, id));
    }
    Ok(StatusCode::NO_CONTENT)
}
