use anyhow::Context;
use tracing_subscriber::EnvFilter;

use booking_app::{config::AppConfig, AppState};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("booking_app=info,booking=info")),
        )
        .init();

    tracing::info!("🎟️  Booking service initializing...");

    let config = AppConfig::from_env().context("Invalid configuration")?;
    tracing::info!(
        "📁 Resources: {:?} (tickets: {})",
        config.resource_dir,
        config.tickets_resource
    );

    let state = AppState::new(&config);

    if config.preload_tickets {
        state
            .ticket_service
            .preload_tickets()
            .with_context(|| format!("Failed to preload tickets from {}", config.tickets_resource))?;

        let count = state.ticket_repo.count().context("Failed to count tickets")?;
        tracing::info!("✅ {} tickets preloaded", count);
    } else {
        tracing::warn!("⚠️  Ticket preload disabled");
    }

    tracing::info!("✅ Booking service ready");

    Ok(())
}
