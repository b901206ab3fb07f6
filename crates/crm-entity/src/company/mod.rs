//! Company domain entities.

pub mod input;
pub mod model;

pub use input::CompanyInput;
pub use model::Company;
