//! Ticket - Booked place for an event
//!
//! Pure domain entity without infrastructure dependencies.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::TicketCategory;

/// Ticket - a place booked by a user for an event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: i64,
    pub event_id: i64,
    pub user_id: i64,
    pub category: TicketCategory,
    pub place: i32,
}

impl Ticket {
    /// Create a new Ticket
    pub fn new(id: i64, event_id: i64, user_id: i64, category: TicketCategory, place: i32) -> Self {
        Self {
            id,
            event_id,
            user_id,
            category,
            place,
        }
    }
}
