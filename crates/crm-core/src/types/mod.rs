//! Shared types used by the server and the client library.

pub mod kind;
pub mod response;
pub mod sorting;

pub use kind::EntityKind;
pub use response::ApiErrorResponse;
pub use sorting::SortDirection;
