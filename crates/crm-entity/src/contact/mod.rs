//! Contact domain entities.

pub mod input;
pub mod model;

pub use input::ContactInput;
pub use model::{Contact, ContactDetail};
