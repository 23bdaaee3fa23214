//! Document lifecycle status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a document.
///
/// `Draft -> Pending -> Signed`. `Signed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    /// Uploaded or instantiated from a template; no signing link yet.
    Draft,
    /// A signing link has been issued and is awaiting a signature.
    Pending,
    /// The client has signed the document.
    Signed,
}

impl DocumentStatus {
    /// Check if the status is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Signed)
    }

    /// Check if a signing link may be issued (or rotated) from this status.
    pub fn can_issue_link(&self) -> bool {
        matches!(self, Self::Draft | Self::Pending)
    }

    /// Check if a signature may be accepted in this status.
    pub fn can_sign(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Pending => "pending",
            Self::Signed => "signed",
        }
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
