//! In-memory implementation of UserRepository

use std::collections::BTreeMap;
use std::sync::RwLock;

use booking::{DomainError, PageRequest, User, UserRepository};

use super::poisoned;

/// In-memory implementation of UserRepository, ordered by id
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<BTreeMap<i64, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn email_taken(users: &BTreeMap<i64, User>, email: &str, except_id: Option<i64>) -> bool {
    users
        .values()
        .any(|u| u.email == email && Some(u.id) != except_id)
}

impl UserRepository for InMemoryUserRepository {
    fn get_user_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.get(&id).cloned())
    }

    fn get_user_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    fn get_users_by_name(
        &self,
        name: &str,
        size: usize,
        page: usize,
    ) -> Result<Vec<User>, DomainError> {
        let users = self.users.read().map_err(poisoned)?;
        let page = PageRequest::of(page, size);

        Ok(users
            .values()
            .filter(|u| u.name_matches(name))
            .skip(page.offset())
            .take(page.page_size())
            .cloned()
            .collect())
    }

    fn save(&self, user: &User) -> Result<User, DomainError> {
        let mut users = self.users.write().map_err(poisoned)?;

        if users.contains_key(&user.id) {
            return Err(DomainError::Conflict(format!(
                "User with id {} already exists",
                user.id
            )));
        }
        if email_taken(&users, &user.email, None) {
            return Err(DomainError::Conflict(format!(
                "User with email {} already exists",
                user.email
            )));
        }

        users.insert(user.id, user.clone());
        Ok(user.clone())
    }

    fn update(&self, user: &User) -> Result<User, DomainError> {
        let mut users = self.users.write().map_err(poisoned)?;

        if !users.contains_key(&user.id) {
            return Err(DomainError::not_found("User", user.id));
        }
        if email_taken(&users, &user.email, Some(user.id)) {
            return Err(DomainError::Conflict(format!(
                "User with email {} already exists",
                user.email
            )));
        }

        users.insert(user.id, user.clone());
        Ok(user.clone())
    }

    fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let mut users = self.users.write().map_err(poisoned)?;
        Ok(users.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> InMemoryUserRepository {
        let repo = InMemoryUserRepository::new();
        repo.save(&User::new(1, "name 11", "user1@example.com")).unwrap();
        repo.save(&User::new(2, "Name 112", "user2@example.com")).unwrap();
        repo.save(&User::new(3, "other", "user3@example.com")).unwrap();
        repo
    }

    #[test]
    fn test_lookup_by_id_and_email() {
        let repo = seeded();

        assert_eq!(repo.get_user_by_id(2).unwrap().unwrap().email, "user2@example.com");
        assert_eq!(repo.get_user_by_email("user3@example.com").unwrap().unwrap().id, 3);
        assert!(repo.get_user_by_id(99).unwrap().is_none());
        assert!(repo.get_user_by_email("nobody@example.com").unwrap().is_none());
    }

    #[test]
    fn test_get_users_by_name_pages_matches_in_id_order() {
        let repo = seeded();

        let first = repo.get_users_by_name("name 11", 10, 1).unwrap();
        let ids: Vec<i64> = first.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 2]);

        let second_page = repo.get_users_by_name("name 11", 1, 2).unwrap();
        assert_eq!(second_page.len(), 1);
        assert_eq!(second_page[0].id, 2);

        assert!(repo.get_users_by_name("name 11", 10, 2).unwrap().is_empty());
        assert!(repo
            .get_users_by_name("name 11", 10, usize::MAX)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_save_rejects_duplicate_id_and_email() {
        let repo = seeded();

        let dup_id = repo.save(&User::new(1, "x", "fresh@example.com")).unwrap_err();
        assert!(matches!(dup_id, DomainError::Conflict(_)));

        let dup_email = repo.save(&User::new(4, "x", "user1@example.com")).unwrap_err();
        assert!(matches!(dup_email, DomainError::Conflict(_)));
    }

    #[test]
    fn test_update_replaces_fields() {
        let repo = seeded();

        let updated = repo.update(&User::new(1, "name 11", "changed@example.com")).unwrap();

        assert_eq!(updated.email, "changed@example.com");
        assert!(repo.get_user_by_email("user1@example.com").unwrap().is_none());
        assert_eq!(repo.get_user_by_email("changed@example.com").unwrap().unwrap().id, 1);
    }

    #[test]
    fn test_update_missing_or_conflicting_user() {
        let repo = seeded();

        assert!(repo
            .update(&User::new(99, "x", "x@example.com"))
            .unwrap_err()
            .is_not_found());

        let conflict = repo.update(&User::new(1, "x", "user2@example.com")).unwrap_err();
        assert!(matches!(conflict, DomainError::Conflict(_)));

        // Keeping one's own email is not a conflict
        assert!(repo.update(&User::new(1, "renamed", "user1@example.com")).is_ok());
    }

    #[test]
    fn test_delete() {
        let repo = seeded();

        assert!(repo.delete(1).unwrap());
        assert!(!repo.delete(1).unwrap());
        assert!(repo.get_user_by_id(1).unwrap().is_none());
    }
}
