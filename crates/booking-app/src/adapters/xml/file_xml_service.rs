//! File-backed implementation of XmlService
//!
//! Resources are resolved against a base directory and deserialized
//! with quick-xml's serde support.

use std::fs;
use std::path::PathBuf;

use serde::de::DeserializeOwned;

use booking::{DomainError, XmlService};

/// XmlService reading resources from a directory
pub struct FileXmlService {
    resource_dir: PathBuf,
}

impl FileXmlService {
    pub fn new(resource_dir: impl Into<PathBuf>) -> Self {
        Self {
            resource_dir: resource_dir.into(),
        }
    }

    fn resolve(&self, resource_name: &str) -> PathBuf {
        self.resource_dir.join(resource_name)
    }
}

impl XmlService for FileXmlService {
    fn unmarshal<T: DeserializeOwned + 'static>(
        &self,
        resource_name: &str,
    ) -> Result<T, DomainError> {
        let path = self.resolve(resource_name);
        let content = fs::read_to_string(&path)
            .map_err(|e| DomainError::Xml(format!("Failed to read {:?}: {}", path, e)))?;

        tracing::debug!("Unmarshalling XML resource {:?}", path);

        quick_xml::de::from_str(&content)
            .map_err(|e| DomainError::Xml(format!("Failed to parse {:?}: {}", path, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use booking::{TicketCategory, TicketsXml};

    const TICKETS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<tickets>
  <ticket user="1" event="1" category="STANDARD" place="10"/>
  <ticket user="2" event="1" category="BAR" place="11"/>
</tickets>
"#;

    #[test]
    fn test_unmarshal_reads_resource_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("tickets.xml"), TICKETS).unwrap();
        let service = FileXmlService::new(dir.path());

        let document: TicketsXml = service.unmarshal("tickets.xml").unwrap();

        assert_eq!(document.len(), 2);
        assert_eq!(document.tickets[1].category, TicketCategory::Bar);
        assert_eq!(document.tickets[1].place, 11);
    }

    #[test]
    fn test_missing_resource_is_xml_error() {
        let dir = tempfile::tempdir().unwrap();
        let service = FileXmlService::new(dir.path());

        let err = service.unmarshal::<TicketsXml>("absent.xml").unwrap_err();

        assert!(matches!(err, DomainError::Xml(_)));
    }

    #[test]
    fn test_malformed_document_is_xml_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("broken.xml"),
            r#"<tickets><ticket user="x"/></tickets>"#,
        )
        .unwrap();
        let service = FileXmlService::new(dir.path());

        let err = service.unmarshal::<TicketsXml>("broken.xml").unwrap_err();

        assert!(matches!(err, DomainError::Xml(_)));
    }
}
