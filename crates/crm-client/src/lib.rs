//! # crm-client
//!
//! The client side of Acme CRM. Page controllers fetch collections through
//! a [`CrmGateway`], compute their aggregates, and feed a
//! [`DataTable`](crm_table::DataTable). The [`ModalCoordinator`] tracks
//! which edit dialog is open and submits it through the same gateway.

pub mod gateway;
pub mod guard;
pub mod http;
pub mod modal;
pub mod pages;

#[cfg(test)]
pub(crate) mod mock;

pub use gateway::CrmGateway;
pub use guard::{LoadGuard, LoadTicket};
pub use http::HttpGateway;
pub use modal::{Editable, ModalCoordinator, ModalSlot};
