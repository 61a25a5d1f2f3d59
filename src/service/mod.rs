//! Validation and data access for each resource.

mod partners;
mod repository;
mod users;
pub mod validation;

pub use partners::PartnerRepository;
pub use repository::Repository;
pub use users::UserRepository;
pub use validation::Validate;
