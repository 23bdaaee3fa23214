//! In-memory user accounts.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use signdesk_core::error::AppError;
use signdesk_core::result::AppResult;
use signdesk_core::types::UserId;
use signdesk_entity::user::User;

use crate::traits::UserRepository;

/// User accounts with a unique username index.
#[derive(Debug, Clone, Default)]
pub struct MemoryUserStore {
    users: Arc<DashMap<UserId, User>>,
    usernames: Arc<DashMap<String, UserId>>,
}

impl MemoryUserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryUserStore {
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        Ok(self.users.get(&id).map(|u| u.value().clone()))
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let Some(id) = self.usernames.get(username).map(|entry| *entry.value()) else {
            return Ok(None);
        };
        self.find_by_id(id).await
    }

    async fn create(&self, user: User) -> AppResult<User> {
        if user.username.trim().is_empty() {
            return Err(AppError::validation("Username is required"));
        }
        // The username slot is claimed first so two racing inserts cannot both win.
        match self.usernames.entry(user.username.clone()) {
            Entry::Occupied(_) => {
                return Err(AppError::conflict(format!(
                    "Username '{}' is already taken",
                    user.username
                )));
            }
            Entry::Vacant(slot) => {
                slot.insert(user.id);
            }
        }
        self.users.insert(user.id, user.clone());
        Ok(user)
    }
}
