//! Route tables: resource routers under `/api/v1`, operational routes at the root.

pub mod common;
pub mod resource;

pub use common::common_routes;
pub use resource::resource_routes;

use crate::service::{PartnerRepository, UserRepository};
use crate::state::AppState;
use axum::Router;

pub const API_PREFIX: &str = "/api/v1";

/// Users and partners, unprefixed.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .merge(resource_routes::<UserRepository>("users"))
        .merge(resource_routes::<PartnerRepository>("partners"))
        .with_state(state)
}
