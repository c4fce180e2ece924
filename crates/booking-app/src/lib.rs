//! Booking Application
//!
//! Use cases and infrastructure adapters for the booking domain.
//!
//! - `application/`: UserService and TicketService
//! - `adapters/`: In-memory repositories and the file-backed XML service
//! - `config`: Environment configuration for the bootstrap binary

pub mod adapters;
pub mod application;
pub mod config;

use std::sync::Arc;

use adapters::{FileXmlService, InMemoryTicketRepository, InMemoryUserRepository};
use application::{TicketService, UserService};
use config::AppConfig;

/// Type aliases for application services with concrete adapter implementations
pub type AppUserService = UserService<InMemoryUserRepository>;
pub type AppTicketService = TicketService<InMemoryTicketRepository, FileXmlService>;

/// Wired application services and the storage they share
pub struct AppState {
    pub user_repo: Arc<InMemoryUserRepository>,
    pub ticket_repo: Arc<InMemoryTicketRepository>,
    pub user_service: Arc<AppUserService>,
    pub ticket_service: Arc<AppTicketService>,
}

impl AppState {
    /// Build services over fresh in-memory storage
    pub fn new(config: &AppConfig) -> Self {
        let user_repo = Arc::new(InMemoryUserRepository::new());
        let ticket_repo = Arc::new(InMemoryTicketRepository::new());
        let xml = Arc::new(FileXmlService::new(config.resource_dir.clone()));

        let user_service = Arc::new(UserService::new(user_repo.clone()));
        let ticket_service = Arc::new(TicketService::new(
            ticket_repo.clone(),
            xml,
            config.tickets_resource.clone(),
        ));

        Self {
            user_repo,
            ticket_repo,
            user_service,
            ticket_service,
        }
    }
}
