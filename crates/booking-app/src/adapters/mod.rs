//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod memory;
pub mod xml;

// Re-exports
pub use memory::{InMemoryTicketRepository, InMemoryUserRepository};
pub use xml::FileXmlService;
