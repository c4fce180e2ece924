//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! repositories and external services.

mod ticket_service;
mod user_service;

pub use ticket_service::TicketService;
pub use user_service::UserService;
