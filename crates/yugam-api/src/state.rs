//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use yugam_auth::{RbacEnforcer, SessionDecoder, SessionEncoder};
use yugam_client::PortalClient;
use yugam_core::AppResult;
use yugam_core::config::AppConfig;
use yugam_service::{
    CoordinatorService, DashboardService, DetailService, ListingService, ProfileService,
    ProgramService, ReportService,
};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. Nothing in here is
/// mutated after startup, so clones are cheap `Arc` bumps.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Remote API ───────────────────────────────────────────
    /// Unauthenticated client; services authorize it per request
    pub client: PortalClient,

    // ── Auth ─────────────────────────────────────────────────
    /// Session token signer
    pub session_encoder: Arc<SessionEncoder>,
    /// Session token validator
    pub session_decoder: Arc<SessionDecoder>,
    /// Role-to-route guard
    pub rbac_enforcer: Arc<RbacEnforcer>,

    // ── Services ─────────────────────────────────────────────
    pub dashboard_service: Arc<DashboardService>,
    pub listing_service: Arc<ListingService>,
    pub program_service: Arc<ProgramService>,
    pub report_service: Arc<ReportService>,
    pub coordinator_service: Arc<CoordinatorService>,
    pub detail_service: Arc<DetailService>,
    pub profile_service: Arc<ProfileService>,
}

impl AppState {
    /// Wire every dependency from configuration.
    pub fn new(config: AppConfig) -> AppResult<Self> {
        let client = PortalClient::new(&config.backend)?;

        Ok(Self {
            session_encoder: Arc::new(SessionEncoder::new(&config.auth)),
            session_decoder: Arc::new(SessionDecoder::new(&config.auth)),
            rbac_enforcer: Arc::new(RbacEnforcer::new()),
            dashboard_service: Arc::new(DashboardService::new(client.clone())),
            listing_service: Arc::new(ListingService::new(client.clone())),
            program_service: Arc::new(ProgramService::new(client.clone())),
            report_service: Arc::new(ReportService::new(client.clone())),
            coordinator_service: Arc::new(CoordinatorService::new(client.clone())),
            detail_service: Arc::new(DetailService::new(client.clone())),
            profile_service: Arc::new(ProfileService::new(client.clone())),
            config: Arc::new(config),
            client,
        })
    }
}
