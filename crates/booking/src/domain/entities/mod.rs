//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - User: Registered customer, unique by id and email
//! - Ticket: Booked place for an event

mod ticket;
mod user;

pub use ticket::*;
pub use user::*;
