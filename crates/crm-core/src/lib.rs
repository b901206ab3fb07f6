//! # crm-core
//!
//! Core crate for Acme CRM. Contains configuration schemas, the entity
//! kind tags and sort types shared by server and client, and the unified
//! error system.
//!
//! This crate has **no** internal dependencies on other CRM crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
