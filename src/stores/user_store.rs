use crate::models::user::User;
use anyhow::Result;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Storage collaborator for user records.
///
/// Implementations own id assignment and the atomicity of creation: a
/// create either fully persists the record or fails leaving nothing
/// behind. The API layer makes no other assumption about the backend.
pub trait UserStore: Send + Sync {
    /// Persist a new user and return it with its assigned id.
    fn create_user(&self, username: String, password: String) -> Result<User>;

    /// Fetch a user by id.
    fn get_user(&self, id: u64) -> Result<Option<User>>;

    /// All users, ordered by id.
    fn list_users(&self) -> Result<Vec<User>>;
}

/// In-memory user store backed by a concurrent map.
pub struct MemoryUserStore {
    users: DashMap<u64, Arc<User>>,
    next_id: AtomicU64,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn clear(&self) {
        self.users.clear();
    }
}

impl UserStore for MemoryUserStore {
    fn create_user(&self, username: String, password: String) -> Result<User> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let user = User::new(id, username, password);

        self.users.insert(id, Arc::new(user.clone()));

        Ok(user)
    }

    fn get_user(&self, id: u64) -> Result<Option<User>> {
        Ok(self.users.get(&id).map(|entry| entry.value().as_ref().clone()))
    }

    fn list_users(&self) -> Result<Vec<User>> {
        let mut users: Vec<User> = self
            .users
            .iter()
            .map(|entry| entry.value().as_ref().clone())
            .collect();

        users.sort_by_key(|user| user.id);

        Ok(users)
    }
}

impl Default for MemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}
