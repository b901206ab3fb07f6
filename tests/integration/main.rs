//! HTTP-level tests for the CRM API.
//!
//! The app is built over a lazy pool pointing at an unreachable database,
//! so only paths that never touch PostgreSQL are exercised here.

mod helpers;

mod auth_test;
mod contacts_test;
mod deals_test;
mod health_test;
