//! In-memory implementation of TicketRepository

use std::collections::BTreeMap;
use std::sync::RwLock;

use booking::{DomainError, Ticket, TicketRepository};

use super::poisoned;

/// In-memory implementation of TicketRepository
#[derive(Default)]
pub struct InMemoryTicketRepository {
    tickets: RwLock<BTreeMap<i64, Ticket>>,
}

impl InMemoryTicketRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored tickets
    pub fn count(&self) -> Result<usize, DomainError> {
        Ok(self.tickets.read().map_err(poisoned)?.len())
    }
}

#[cfg(test)]
impl InMemoryTicketRepository {
    pub(crate) fn find_by_id(&self, id: i64) -> Result<Option<Ticket>, DomainError> {
        Ok(self.tickets.read().map_err(poisoned)?.get(&id).cloned())
    }
}

impl TicketRepository for InMemoryTicketRepository {
    fn save(&self, ticket: &Ticket) -> Result<Ticket, DomainError> {
        let mut tickets = self.tickets.write().map_err(poisoned)?;
        tickets.insert(ticket.id, ticket.clone());
        Ok(ticket.clone())
    }
}
