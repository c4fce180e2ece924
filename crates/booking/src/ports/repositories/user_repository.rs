//! User Repository Port
//!
//! Abstract interface for User persistence operations.

use crate::domain::{errors::DomainError, User};

/// Repository interface for User entities
///
/// Implementations must enforce id and email uniqueness themselves:
/// callers check existence first, but the check and the write are not atomic.
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
pub trait UserRepository: Send + Sync {
    /// Find a User by ID
    fn get_user_by_id(&self, id: i64) -> Result<Option<User>, DomainError>;

    /// Find a User by email
    fn get_user_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find Users whose name matches, one page at a time (`page` is 1-indexed)
    fn get_users_by_name(
        &self,
        name: &str,
        size: usize,
        page: usize,
    ) -> Result<Vec<User>, DomainError>;

    /// Insert a new User.
    ///
    /// Fails with `Conflict` when the id or email is already taken.
    fn save(&self, user: &User) -> Result<User, DomainError>;

    /// Replace an existing User.
    ///
    /// Fails with `NotFound` when the id is absent and with `Conflict`
    /// when the email belongs to another User.
    fn update(&self, user: &User) -> Result<User, DomainError>;

    /// Delete a User by ID
    fn delete(&self, id: i64) -> Result<bool, DomainError>;
}
