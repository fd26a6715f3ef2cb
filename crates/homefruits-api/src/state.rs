//! Application state shared across all handlers and extractors.

use std::sync::Arc;

use homefruits_auth::{AccessGuard, SessionManager, TokenSigner};
use homefruits_core::config::AppConfig;
use homefruits_database::Stores;
use homefruits_service::{CatalogService, ReservationEngine};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// Store handles for the configured backend
    pub stores: Stores,

    // ── Auth ─────────────────────────────────────────────────
    /// Registration, login and refresh flows
    pub session_manager: Arc<SessionManager>,
    /// Bearer token and admin checks
    pub guard: Arc<AccessGuard>,

    // ── Services ─────────────────────────────────────────────
    /// Stock reservation engine
    pub reservations: Arc<ReservationEngine>,
    /// Catalog and cart queries
    pub catalog: Arc<CatalogService>,
}

impl AppState {
    /// Wires every component from configuration and a set of stores.
    pub fn new(config: AppConfig, stores: Stores) -> Self {
        let signer = Arc::new(TokenSigner::from_config(&config.auth));

        let session_manager = Arc::new(SessionManager::from_config(
            &config.auth,
            Arc::clone(&stores.users),
            Arc::clone(&stores.tokens),
            Arc::clone(&signer),
        ));

        let guard = Arc::new(AccessGuard::new(
            Arc::clone(&signer),
            Arc::clone(&stores.users),
            config.auth.admin_email.clone(),
        ));

        let reservations = Arc::new(ReservationEngine::new(Arc::clone(&stores.inventory)));
        let catalog = Arc::new(CatalogService::new(Arc::clone(&stores.inventory)));

        Self {
            config: Arc::new(config),
            stores,
            session_manager,
            guard,
            reservations,
            catalog,
        }
    }
}
