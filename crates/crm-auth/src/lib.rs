//! # crm-auth
//!
//! Authentication for Acme CRM.
//!
//! ## Modules
//!
//! - `jwt`: HS256 token creation and validation
//! - `password`: Argon2id password hashing
//! - `credentials`: email/password verification with the optional
//!   development fallback account
//! - `session`: sign-in and bearer-token authentication flows

pub mod credentials;
pub mod jwt;
pub mod password;
pub mod session;

pub use credentials::{CredentialVerifier, UserLookup};
pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::PasswordHasher;
pub use session::{SessionManager, SignInRequest, SignInResult};
