//! Validated request body.

use crate::error::AppError;
use crate::service::validation::{parse_body, Validate};
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};

/// Body parsed as JSON (whatever the `Content-Type`) and run through [`Validate`].
/// Anything unparseable or off-schema rejects with a validation error.
pub struct Payload<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for Payload<T>
where
    S: Send + Sync,
    T: Validate + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await?;
        let value = parse_body(&bytes)?;
        Ok(Payload(T::validate(value)?))
    }
}
