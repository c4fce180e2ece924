//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod ticket_repository;
mod user_repository;

pub use ticket_repository::*;
pub use user_repository::*;
