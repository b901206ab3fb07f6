//! Concrete repository implementations for all CRM entities.

pub mod company;
pub mod contact;
pub mod deal;
pub mod pipeline;
pub mod task;
pub mod team;
pub mod user;

pub use company::CompanyRepository;
pub use contact::ContactRepository;
pub use deal::DealRepository;
pub use pipeline::PipelineRepository;
pub use task::TaskRepository;
pub use team::TeamRepository;
pub use user::UserRepository;
