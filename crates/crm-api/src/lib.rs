//! # crm-api
//!
//! HTTP API layer for Acme CRM built on Axum.
//!
//! Provides the `/api` endpoints, the bearer-token and validated-JSON
//! extractors, middleware (CORS, request logging), and response DTOs.

pub mod app;
pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, shutdown_signal};
pub use state::AppState;
