use std::time::Duration;

use stagepass_auth::{AccountDirectory, Role};
use stagepass_service::{TicketService, seed};

/// Runtime configuration, read from the environment at bootstrap.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Artificial delay applied to every service operation.
    pub simulated_latency: Duration,
    /// Whether to seed the demo catalog and demo accounts on startup.
    pub seed_demo: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            simulated_latency: Duration::ZERO,
            seed_demo: true,
        }
    }
}

impl ServiceConfig {
    /// `STAGEPASS_LATENCY_MS` (default 0) and `STAGEPASS_SEED_DEMO`
    /// (default true).
    pub fn from_env() -> Self {
        let simulated_latency = match std::env::var("STAGEPASS_LATENCY_MS") {
            Ok(raw) => match raw.parse::<u64>() {
                Ok(ms) => Duration::from_millis(ms),
                Err(_) => {
                    tracing::warn!(%raw, "STAGEPASS_LATENCY_MS is not a number; using 0");
                    Duration::ZERO
                }
            },
            Err(_) => Duration::ZERO,
        };

        let seed_demo = std::env::var("STAGEPASS_SEED_DEMO")
            .map(|v| v.parse::<bool>().unwrap_or(true))
            .unwrap_or(true);

        Self {
            simulated_latency,
            seed_demo,
        }
    }
}

/// Everything the handlers need, shared behind an `Arc` via `Extension`.
pub struct AppServices {
    pub tickets: TicketService,
    pub accounts: AccountDirectory,
}

pub async fn build_services(config: ServiceConfig) -> AppServices {
    let tickets = TicketService::new().with_simulated_latency(config.simulated_latency);
    let accounts = AccountDirectory::new();

    if config.seed_demo {
        seed_demo(&tickets, &accounts).await;
    }

    AppServices { tickets, accounts }
}

/// Demo accounts + demo catalog, mirroring the fixtures the UI expects.
async fn seed_demo(tickets: &TicketService, accounts: &AccountDirectory) {
    let user = accounts.register("John Doe", "user@example.com", "password123", Role::User);
    let organizer = accounts.register(
        "Event Manager",
        "organizer@example.com",
        "password123",
        Role::Organizer,
    );

    match (user, organizer) {
        (Ok(_), Ok(organizer)) => {
            if let Err(e) = seed::seed_demo_events(tickets, organizer.id, &organizer.name).await {
                tracing::warn!(error = %e, "failed to seed demo events");
            }
        }
        (user, organizer) => {
            tracing::warn!(?user, ?organizer, "failed to seed demo accounts");
        }
    }
}
