//! Ticket Application Service (Use Case)
//!
//! Bulk-loads tickets from the configured XML resource.

use std::sync::Arc;

use booking::{DomainError, TicketConverter, TicketRepository, TicketsXml, XmlService};

/// Application service for Ticket operations
pub struct TicketService<R: TicketRepository, X: XmlService> {
    repo: Arc<R>,
    xml: Arc<X>,
    tickets_resource: String,
}

impl<R: TicketRepository, X: XmlService> TicketService<R, X> {
    pub fn new(repo: Arc<R>, xml: Arc<X>, tickets_resource: impl Into<String>) -> Self {
        Self {
            repo,
            xml,
            tickets_resource: tickets_resource.into(),
        }
    }

    /// Load every ticket from the XML resource into the repository.
    ///
    /// Stops at the first failed save; tickets saved before it are kept.
    pub fn preload_tickets(&self) -> Result<bool, DomainError> {
        let document: TicketsXml = self.xml.unmarshal(&self.tickets_resource)?;
        if document.is_empty() {
            tracing::warn!("No tickets found in {}", self.tickets_resource);
        }

        let tickets = TicketConverter::to_tickets(&document);

        for ticket in &tickets {
            let saved = self.repo.save(ticket).map_err(|e| {
                tracing::warn!("Ticket preload aborted at ticket {}: {}", ticket.id, e);
                e
            })?;
            tracing::debug!(
                "Preloaded Ticket {} (event {}, user {}, {} place {})",
                saved.id,
                saved.event_id,
                saved.user_id,
                saved.category,
                saved.place
            );
        }

        tracing::info!(
            "Preloaded {} tickets from {}",
            document.len(),
            self.tickets_resource
        );

        Ok(true)
    }
}
