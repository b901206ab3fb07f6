//! Deal status enumeration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lifecycle status of a deal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "deal_status", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum DealStatus {
    #[default]
    Open,
    Won,
    Lost,
    Pending,
}

impl DealStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::Won => "WON",
            Self::Lost => "LOST",
            Self::Pending => "PENDING",
        }
    }

    /// Whether the deal has reached a final outcome.
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for DealStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DealStatus {
    type Err = crm_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "OPEN" => Ok(Self::Open),
            "WON" => Ok(Self::Won),
            "LOST" => Ok(Self::Lost),
            "PENDING" => Ok(Self::Pending),
            _ => Err(crm_core::AppError::validation(format!(
                "Invalid deal status: '{s}'. Expected one of: OPEN, WON, LOST, PENDING"
            ))),
        }
    }
}
