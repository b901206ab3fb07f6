//! Request handlers, one module per resource.

pub mod auth;
pub mod company;
pub mod contact;
pub mod deal;
pub mod health;
pub mod pipeline;
pub mod task;
