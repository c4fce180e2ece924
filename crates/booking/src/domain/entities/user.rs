//! User - Registered customer
//!
//! Pure domain entity without infrastructure dependencies.

use serde::{Deserialize, Serialize};

/// User - identified by `id`, with `email` as the unique business key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl User {
    /// Create a new User
    pub fn new(id: i64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }

    /// Case-insensitive partial match on the user's name
    pub fn name_matches(&self, pattern: &str) -> bool {
        self.name.to_lowercase().contains(&pattern.to_lowercase())
    }
}
