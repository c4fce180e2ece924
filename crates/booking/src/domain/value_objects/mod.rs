//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod page_request;
mod ticket_category;

pub use page_request::*;
pub use ticket_category::*;
