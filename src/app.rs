//! Application assembly: storage bootstrap and the layered router.

use crate::error::AppError;
use crate::routes::{api_routes, common_routes, API_PREFIX};
use crate::settings::Settings;
use crate::state::AppState;
use crate::store::{connect, ensure_database_exists, ensure_tables};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Open storage for `settings` and make sure both tables exist.
pub async fn bootstrap(settings: &Settings) -> Result<AppState, AppError> {
    ensure_database_exists(&settings.database_url).await?;
    let pool = connect(settings).await?;
    ensure_tables(&pool).await?;
    tracing::info!(database_url = %settings.database_url, "storage ready");
    Ok(AppState::new(pool))
}

pub fn app(state: AppState, settings: &Settings) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .nest(API_PREFIX, api_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(settings.body_limit_bytes)),
        )
}
