//! In-Memory Repository Implementations
//!
//! Process-local storage behind `RwLock`s. Uniqueness rules are checked
//! and applied under the same write lock.

mod ticket_repository;
mod user_repository;

pub use ticket_repository::InMemoryTicketRepository;
pub use user_repository::InMemoryUserRepository;

use booking::DomainError;

fn poisoned<E>(_: E) -> DomainError {
    DomainError::Repository("storage lock poisoned".to_string())
}
