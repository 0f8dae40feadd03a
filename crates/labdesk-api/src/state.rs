//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use labdesk_auth::jwt::{JwtDecoder, JwtEncoder};
use labdesk_auth::password::PasswordHasher;
use labdesk_core::config::AppConfig;
use labdesk_database::repositories::announcement::AnnouncementRepository;
use labdesk_database::repositories::endorsement::EndorsementRepository;
use labdesk_database::repositories::qc_test::QcTestRepository;
use labdesk_database::repositories::user::UserRepository;
use labdesk_service::announcement::AnnouncementService;
use labdesk_service::endorsement::EndorsementService;
use labdesk_service::qc::QcService;
use labdesk_service::user::{UserAdminService, UserService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,
    /// JWT token decoder and validator.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// User login and profile service.
    pub user_service: Arc<UserService>,
    /// User account administration service.
    pub user_admin_service: Arc<UserAdminService>,
    /// Announcement board service.
    pub announcement_service: Arc<AnnouncementService>,
    /// Endorsement ticket service.
    pub endorsement_service: Arc<EndorsementService>,
    /// QC test board service.
    pub qc_service: Arc<QcService>,
}

impl AppState {
    /// Wires up repositories and services over a connected pool.
    pub fn new(config: AppConfig, db_pool: PgPool) -> Self {
        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
        let password_hasher = Arc::new(PasswordHasher::new());

        let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
        let announcement_repo = Arc::new(AnnouncementRepository::new(db_pool.clone()));
        let endorsement_repo = Arc::new(EndorsementRepository::new(db_pool.clone()));
        let qc_repo = Arc::new(QcTestRepository::new(db_pool.clone()));

        let user_service = Arc::new(UserService::new(
            user_repo.clone(),
            password_hasher.clone(),
            jwt_encoder,
        ));
        let user_admin_service = Arc::new(UserAdminService::new(
            user_repo,
            password_hasher,
            &config.auth,
        ));
        let announcement_service = Arc::new(AnnouncementService::new(announcement_repo));
        let endorsement_service = Arc::new(EndorsementService::new(endorsement_repo));
        let qc_service = Arc::new(QcService::new(qc_repo));

        Self {
            config: Arc::new(config),
            db_pool,
            jwt_decoder,
            user_service,
            user_admin_service,
            announcement_service,
            endorsement_service,
            qc_service,
        }
    }
}
