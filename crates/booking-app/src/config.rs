//! Application configuration
//!
//! Read from the process environment (optionally seeded from `.env`).

use std::path::PathBuf;

use thiserror::Error;

pub const RESOURCE_DIR_VAR: &str = "BOOKING_RESOURCE_DIR";
pub const TICKETS_RESOURCE_VAR: &str = "BOOKING_TICKETS_RESOURCE";
pub const PRELOAD_TICKETS_VAR: &str = "BOOKING_PRELOAD_TICKETS";

const DEFAULT_RESOURCE_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/resources");
const DEFAULT_TICKETS_RESOURCE: &str = "tickets.xml";

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a boolean, got {value:?}")]
    InvalidBool { var: &'static str, value: String },
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory XML resources are resolved against
    pub resource_dir: PathBuf,
    /// Resource name of the ticket preload document
    pub tickets_resource: String,
    /// Whether to preload tickets at start-up
    pub preload_tickets: bool,
}

impl AppConfig {
    pub fn new(resource_dir: impl Into<PathBuf>) -> Self {
        Self {
            resource_dir: resource_dir.into(),
            ..Self::default()
        }
    }

    /// Set the ticket resource name
    pub fn with_tickets_resource(mut self, name: impl Into<String>) -> Self {
        self.tickets_resource = name.into();
        self
    }

    /// Enable or disable the start-up preload
    pub fn with_preload_tickets(mut self, enable: bool) -> Self {
        self.preload_tickets = enable;
        self
    }

    /// Read configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dir) = lookup(RESOURCE_DIR_VAR) {
            config.resource_dir = PathBuf::from(dir);
        }
        if let Some(name) = lookup(TICKETS_RESOURCE_VAR) {
            config.tickets_resource = name;
        }
        if let Some(value) = lookup(PRELOAD_TICKETS_VAR) {
            config.preload_tickets = parse_bool(PRELOAD_TICKETS_VAR, &value)?;
        }

        Ok(config)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            resource_dir: PathBuf::from(DEFAULT_RESOURCE_DIR),
            tickets_resource: DEFAULT_TICKETS_RESOURCE.to_string(),
            preload_tickets: true,
        }
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            var,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var: &str| map.get(var).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.tickets_resource, "tickets.xml");
        assert!(config.preload_tickets);
    }

    #[test]
    fn test_default_resource_dir_holds_ticket_document() {
        let config = AppConfig::default();
        assert!(config.resource_dir.join(&config.tickets_resource).is_file());
    }

    #[test]
    fn test_reads_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            (RESOURCE_DIR_VAR, "/srv/booking"),
            (TICKETS_RESOURCE_VAR, "seed.xml"),
            (PRELOAD_TICKETS_VAR, "off"),
        ]))
        .unwrap();

        assert_eq!(
            config,
            AppConfig::new("/srv/booking")
                .with_tickets_resource("seed.xml")
                .with_preload_tickets(false)
        );
    }

    #[test]
    fn test_invalid_bool_is_rejected() {
        let err = AppConfig::from_lookup(lookup(&[(PRELOAD_TICKETS_VAR, "maybe")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidBool {
                var: PRELOAD_TICKETS_VAR,
                value: "maybe".to_string(),
            }
        );
    }
}
