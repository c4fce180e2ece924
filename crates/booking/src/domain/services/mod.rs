//! Domain Services
//!
//! Stateless domain logic that does not belong to a single entity.

mod ticket_converter;

pub use ticket_converter::*;
