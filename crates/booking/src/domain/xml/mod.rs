//! XML Documents
//!
//! Shapes of the XML resources read by the preload path.
//! Attributes are mapped with quick-xml's `@` prefix convention.

mod tickets;

pub use tickets::*;
