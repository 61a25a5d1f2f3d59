//! Router for one CRUD resource, parameterised by its repository.

use crate::handlers::resource::{create, delete, list, read, replace};
use crate::service::Repository;
use crate::state::AppState;
use axum::{routing::get, Router};

/// `/{segment}/` (GET, POST) and `/{segment}/:id` (GET, PUT, DELETE).
/// The collection path also answers without the trailing slash. Other verbs get 405.
pub fn resource_routes<R: Repository>(segment: &str) -> Router<AppState> {
    let collection = get(list::<R>).post(create::<R>);
    let item = get(read::<R>).put(replace::<R>).delete(delete::<R>);
    Router::new()
        .route(&format!("/{}/", segment), collection.clone())
        .route(&format!("/{}", segment), collection)
        .route(&format!("/{}/:id", segment), item)
}
