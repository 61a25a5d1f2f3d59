//! External representations of the two resources and their validated input shapes.

mod partner;
mod user;

pub use partner::{Partner, PartnerIn};
pub use user::{User, UserIn, UserStatus};
