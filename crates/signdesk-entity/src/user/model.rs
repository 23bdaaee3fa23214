//! User entity model.

use serde::{Deserialize, Serialize};

use signdesk_core::types::UserId;

/// An account record. No login flow consumes it yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Unique login name.
    pub username: String,
    /// Opaque password value.
    #[serde(skip_serializing, default)]
    pub password: String,
}

impl User {
    /// Build a user record.
    pub fn new(data: CreateUser) -> Self {
        Self {
            id: UserId::new(),
            username: data.username,
            password: data.password,
        }
    }
}

/// Data required to create a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Unique login name.
    pub username: String,
    /// Opaque password value.
    pub password: String,
}
