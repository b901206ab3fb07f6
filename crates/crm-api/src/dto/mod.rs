//! Response bodies of the JSON API.

pub mod response;

pub use response::*;
