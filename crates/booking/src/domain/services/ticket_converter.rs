//! Ticket Converter
//!
//! Turns the ticket preload document into domain tickets.

use crate::domain::{Ticket, TicketsXml};

/// Converts [`TicketsXml`] into [`Ticket`]s
pub struct TicketConverter;

impl TicketConverter {
    /// One ticket per `<ticket>` element, in document order.
    ///
    /// Ids are assigned sequentially starting at 0.
    pub fn to_tickets(document: &TicketsXml) -> Vec<Ticket> {
        let tickets: Vec<Ticket> = document
            .tickets
            .iter()
            .zip(0_i64..)
            .map(|(xml, id)| Ticket::new(id, xml.event_id, xml.user_id, xml.category, xml.place))
            .collect();

        tracing::debug!("Converted {} tickets from XML", tickets.len());

        tickets
    }
}
