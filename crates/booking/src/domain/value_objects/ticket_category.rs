//! TicketCategory - Seating category of a ticket

use serde::{Deserialize, Serialize};

/// Ticket category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum TicketCategory {
    Standard,
    Premium,
    Bar,
}

impl std::fmt::Display for TicketCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TicketCategory::Standard => write!(f, "STANDARD"),
            TicketCategory::Premium => write!(f, "PREMIUM"),
            TicketCategory::Bar => write!(f, "BAR"),
        }
    }
}

impl std::str::FromStr for TicketCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "STANDARD" => Ok(TicketCategory::Standard),
            "PREMIUM" => Ok(TicketCategory::Premium),
            "BAR" => Ok(TicketCategory::Bar),
            _ => Err(format!("Unknown ticket category: {}", s)),
        }
    }
}
