//! XML Service Port
//!
//! Abstract interface for reading XML resources into typed documents.

use serde::de::DeserializeOwned;

use crate::domain::errors::DomainError;

/// Service interface for unmarshalling named XML resources
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
pub trait XmlService: Send + Sync {
    /// Read the resource called `resource_name` and deserialize it as `T`
    fn unmarshal<T: DeserializeOwned + 'static>(&self, resource_name: &str)
        -> Result<T, DomainError>;
}
