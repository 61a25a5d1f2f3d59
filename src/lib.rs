//! CRUD REST backend for two resources, users and partners, on SQLite.

pub mod app;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod settings;
pub mod state;
pub mod store;

pub use app::{app, bootstrap};
pub use error::{AppError, ValidationError};
pub use model::{Partner, PartnerIn, User, UserIn, UserStatus};
pub use routes::{api_routes, common_routes, resource_routes, API_PREFIX};
pub use service::{PartnerRepository, Repository, UserRepository, Validate};
pub use settings::Settings;
pub use state::AppState;
pub use store::{connect, ensure_database_exists, ensure_tables};
