//! Request extractors shared by every resource router.

pub mod id;
pub mod payload;
pub mod session;

pub use id::ResourceId;
pub use payload::Payload;
pub use session::DbSession;
