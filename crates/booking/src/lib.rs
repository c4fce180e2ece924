//! Booking Domain Library
//!
//! Core domain types and interfaces for the booking backend.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (User, Ticket)
//!   - `value_objects/`: Immutable value types (TicketCategory, PageRequest)
//!   - `services/`: Domain services (TicketConverter)
//!   - `xml/`: XML document shapes consumed by the preload path
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!   - `services/`: External service interfaces
//!
//! # Usage
//!
//! ```rust,ignore
//! use booking::domain::{Ticket, User};
//! use booking::ports::{UserRepository, XmlService};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    DomainError, PageRequest, Ticket, TicketCategory, TicketConverter, TicketXml, TicketsXml,
    User,
};
pub use ports::{TicketRepository, UserRepository, XmlService};

#[cfg(any(test, feature = "mocks"))]
pub use ports::{MockTicketRepository, MockUserRepository, MockXmlService};
