//! Task domain entities.

pub mod input;
pub mod model;
pub mod status;

pub use input::TaskInput;
pub use model::{Task, TaskDetail};
pub use status::TaskStatus;
