//! # crm-database
//!
//! PostgreSQL connection management and concrete repository
//! implementations for all CRM entities. Every team-owned query takes the
//! caller's team id so rows from other teams are never returned.

pub mod connection;
pub mod error;
pub mod migration;
pub mod repositories;
pub mod seed;

pub use connection::DatabasePool;
pub use migration::run_migrations;
pub use seed::{SeedSummary, seed_demo};
