//! XML Resource Adapters

mod file_xml_service;

pub use file_xml_service::FileXmlService;
