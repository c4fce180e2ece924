//! Ticket preload document
//!
//! ```xml
//! <tickets>
//!   <ticket user="1" event="1" category="BAR" place="1"/>
//! </tickets>
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::TicketCategory;

/// Root `<tickets>` element
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "tickets")]
pub struct TicketsXml {
    #[serde(rename = "ticket", default)]
    pub tickets: Vec<TicketXml>,
}

/// Single `<ticket>` element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketXml {
    #[serde(rename = "@user")]
    pub user_id: i64,
    #[serde(rename = "@event")]
    pub event_id: i64,
    #[serde(rename = "@category")]
    pub category: TicketCategory,
    #[serde(rename = "@place")]
    pub place: i32,
}

impl TicketsXml {
    pub fn new(tickets: Vec<TicketXml>) -> Self {
        Self { tickets }
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }
}
