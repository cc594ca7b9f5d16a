use serde::{Deserialize, Serialize};

/// A stored user account.
///
/// The password lives only in the store; API responses always use the
/// [`UserProfile`] projection, which omits it.
#[derive(Clone, Debug)]
pub struct User {
    /// Store-assigned id, unique and immutable
    pub id: u64,
    pub username: String,
    pub password: String,
}

impl User {
    pub fn new(id: u64, username: String, password: String) -> Self {
        Self {
            id,
            username,
            password,
        }
    }
}

/// Response-safe projection of a user.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: u64,
    pub username: String,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
        }
    }
}
