//! Sign-in and bearer-token authentication.

pub mod manager;

pub use manager::{SessionManager, SignInRequest, SignInResult};
