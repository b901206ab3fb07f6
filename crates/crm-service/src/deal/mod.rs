//! Deal use cases and payload coercion.

pub mod coerce;
pub mod service;

pub use service::DealService;
