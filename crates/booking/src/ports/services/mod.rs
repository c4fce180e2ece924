//! Service Ports
//!
//! Abstract interfaces for external services.

mod xml;

pub use xml::*;
