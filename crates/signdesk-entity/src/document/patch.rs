//! Externally supplied document edits.

use serde::{Deserialize, Serialize};

use signdesk_core::error::AppError;
use signdesk_core::result::AppResult;

use super::model::Document;

/// The only fields an external caller may patch.
///
/// Lifecycle fields (`status`, `signedAt`, `secureToken`, `signatureData`)
/// are absent; they change only through link issuance and
/// signing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentPatch {
    /// New title.
    pub title: Option<String>,
    /// New client email; `Some(None)` clears it.
    pub client_email: Option<Option<String>>,
}

impl DocumentPatch {
    /// Merge the patch over a document.
    pub fn apply(self, doc: &mut Document) -> AppResult<()> {
        if let Some(title) = self.title {
            let title = title.trim();
            if title.is_empty() {
                return Err(AppError::validation("Title cannot be blank"));
            }
            doc.title = title.to_string();
        }
        if let Some(client_email) = self.client_email {
            doc.client_email = client_email.filter(|e| !e.trim().is_empty());
        }
        Ok(())
    }
}
