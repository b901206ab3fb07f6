//! # crm-entity
//!
//! Domain entity models for Acme CRM. Every struct in this crate represents
//! a database table row, a joined read model, or a write payload. Records
//! serialize in camelCase to match the JSON API.

pub mod company;
pub mod contact;
pub mod deal;
pub mod pipeline;
pub mod refs;
pub mod serde_util;
pub mod task;
pub mod team;
pub mod user;

pub use company::{Company, CompanyInput};
pub use contact::{Contact, ContactDetail, ContactInput};
pub use deal::{Deal, DealChanges, DealDetail, DealInput, DealStatus};
pub use pipeline::{Pipeline, PipelineWithStages, Stage};
pub use refs::{CompanyRef, ContactRef, DealRef, StageRef};
pub use task::{Task, TaskDetail, TaskInput, TaskStatus};
pub use team::{MemberRole, Team, TeamMembership};
pub use user::{Role, SessionUser, User};
