//! Template category enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category a template is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateCategory {
    /// Service, employment, and other contracts.
    Contracts,
    /// Invoices.
    Invoices,
    /// Business proposals.
    Proposals,
    /// Non-disclosure agreements.
    Ndas,
    /// Receipts.
    Receipts,
    /// Anything else.
    Other,
}

impl TemplateCategory {
    /// Return the category as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Contracts => "contracts",
            Self::Invoices => "invoices",
            Self::Proposals => "proposals",
            Self::Ndas => "ndas",
            Self::Receipts => "receipts",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for TemplateCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parsing is exact and case-sensitive.
impl FromStr for TemplateCategory {
    type Err = signdesk_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "contracts" => Ok(Self::Contracts),
            "invoices" => Ok(Self::Invoices),
            "proposals" => Ok(Self::Proposals),
            "ndas" => Ok(Self::Ndas),
            "receipts" => Ok(Self::Receipts),
            "other" => Ok(Self::Other),
            _ => Err(signdesk_core::AppError::validation(format!(
                "Invalid template category: '{s}'"
            ))),
        }
    }
}
