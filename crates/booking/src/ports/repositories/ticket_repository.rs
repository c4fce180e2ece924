//! Ticket Repository Port
//!
//! Abstract interface for Ticket persistence operations.

use crate::domain::{errors::DomainError, Ticket};

/// Repository interface for Ticket entities
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
pub trait TicketRepository: Send + Sync {
    /// Save a Ticket (insert or replace by ID)
    fn save(&self, ticket: &Ticket) -> Result<Ticket, DomainError>;
}
