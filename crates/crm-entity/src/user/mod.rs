//! User domain entities.

pub mod model;
pub mod role;

pub use model::{SessionUser, User};
pub use role::Role;
