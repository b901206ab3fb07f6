//! Deal domain entities.

pub mod input;
pub mod model;
pub mod status;

pub use input::{DealChanges, DealInput};
pub use model::{Deal, DealDetail};
pub use status::DealStatus;
