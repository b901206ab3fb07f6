//! The closed set of entity kinds managed by the CRM.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Entity kinds that own an edit dialog and an API collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Contact,
    Company,
    Deal,
    Task,
}

impl EntityKind {
    /// Every kind, in menu order.
    pub const ALL: [EntityKind; 4] = [Self::Contact, Self::Company, Self::Deal, Self::Task];

    /// Collection path segment under `/api`.
    pub fn collection(&self) -> &'static str {
        match self {
            Self::Contact => "contacts",
            Self::Company => "companies",
            Self::Deal => "deals",
            Self::Task => "tasks",
        }
    }

    /// Human label used in log lines and empty-state messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Contact => "contact",
            Self::Company => "company",
            Self::Deal => "deal",
            Self::Task => "task",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
