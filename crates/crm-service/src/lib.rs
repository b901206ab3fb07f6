//! # crm-service
//!
//! Business logic service layer for Acme CRM. Each service resolves the
//! caller's team, checks that linked records belong to it, and delegates
//! to the repositories.
//!
//! Services follow constructor injection; all dependencies are provided
//! at construction time via `Arc` references.

pub mod company;
pub mod contact;
pub mod context;
pub mod deal;
pub mod pipeline;
pub mod scope;
pub mod task;

pub use company::CompanyService;
pub use contact::ContactService;
pub use context::RequestContext;
pub use deal::DealService;
pub use pipeline::PipelineService;
pub use scope::TeamScope;
pub use task::TaskService;
