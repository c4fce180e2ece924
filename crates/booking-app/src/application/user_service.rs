//! User Application Service (Use Case)
//!
//! Orchestrates domain operations for User management.

use std::sync::Arc;

use booking::{DomainError, PageRequest, User, UserRepository};

/// Application service for User operations
pub struct UserService<R: UserRepository> {
    repo: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Get a User by ID
    pub fn get_user_by_id(&self, id: i64) -> Result<User, DomainError> {
        self.repo
            .get_user_by_id(id)?
            .ok_or_else(|| DomainError::not_found("User", id))
    }

    /// Get a User by email
    pub fn get_user_by_email(&self, email: &str) -> Result<User, DomainError> {
        self.repo
            .get_user_by_email(email)?
            .ok_or_else(|| DomainError::not_found_by("User", "email", email))
    }

    /// Get one page of Users matching `name`
    pub fn get_users_by_name(
        &self,
        name: &str,
        page: PageRequest,
    ) -> Result<Vec<User>, DomainError> {
        self.repo
            .get_users_by_name(name, page.page_size(), page.page_number())
    }

    /// Create a new User
    pub fn create_user(&self, user: &User) -> Result<User, DomainError> {
        if self.repo.get_user_by_id(user.id)?.is_some() {
            return Err(DomainError::Validation(format!(
                "User with id {} already exists",
                user.id
            )));
        }

        // Storage still rejects duplicates that slip past the check above
        let saved = self.repo.save(user).map_err(|e| match e {
            DomainError::Conflict(msg) => DomainError::Validation(msg),
            other => other,
        })?;

        tracing::info!("Created User: {} ({})", saved.email, saved.id);

        Ok(saved)
    }

    /// Update an existing User
    pub fn update_user(&self, user: &User) -> Result<User, DomainError> {
        if self.repo.get_user_by_id(user.id)?.is_none() {
            return Err(DomainError::not_found("User", user.id));
        }

        let updated = self.repo.update(user)?;

        tracing::info!("Updated User: {} ({})", updated.email, updated.id);

        Ok(updated)
    }

    /// Delete a User
    pub fn delete_user(&self, id: i64) -> Result<bool, DomainError> {
        if self.repo.get_user_by_id(id)?.is_none() {
            return Err(DomainError::not_found("User", id));
        }

        // The row can vanish between the check and the delete
        if !self.repo.delete(id)? {
            return Err(DomainError::not_found("User", id));
        }

        tracing::info!("Deleted User: {}", id);
        Ok(true)
    }
}
