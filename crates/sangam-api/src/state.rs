//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use sangam_auth::jwt::{JwtDecoder, JwtEncoder};
use sangam_auth::password::{PasswordHasher, PasswordValidator};
use sangam_core::config::AppConfig;
use sangam_core::result::AppResult;
use sangam_core::traits::store::FileStore;
use sangam_database::repositories::interest::InterestRepository;
use sangam_database::repositories::message::MessageRepository;
use sangam_database::repositories::notification::NotificationRepository;
use sangam_database::repositories::profile_view::ProfileViewRepository;
use sangam_database::repositories::push_subscription::PushSubscriptionRepository;
use sangam_database::repositories::question::QuestionRepository;
use sangam_database::repositories::user::UserRepository;
use sangam_realtime::RealtimeEngine;
use sangam_service::account::AccountService;
use sangam_service::conversation::ConversationService;
use sangam_service::interest::InterestService;
use sangam_service::notification::{NotificationService, Notifier};
use sangam_service::profile::{PhotoService, ProfileService};
use sangam_service::push::{PushDelivery, PushService};
use sangam_service::question::QuestionService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,
    /// Upload storage backend.
    pub file_store: Arc<dyn FileStore>,

    /// JWT token decoder and validator.
    pub jwt_decoder: Arc<JwtDecoder>,

    /// WebSocket hint engine.
    pub realtime: RealtimeEngine,

    /// Account registration and login.
    pub account_service: Arc<AccountService>,
    /// Profile retrieval and updates.
    pub profile_service: Arc<ProfileService>,
    /// Photo uploads.
    pub photo_service: Arc<PhotoService>,
    /// Interest lifecycle.
    pub interest_service: Arc<InterestService>,
    /// Direct messaging.
    pub conversation_service: Arc<ConversationService>,
    /// Notification feed.
    pub notification_service: Arc<NotificationService>,
    /// Community Q&A.
    pub question_service: Arc<QuestionService>,
    /// Push subscriptions.
    pub push_service: Arc<PushService>,
    /// Push delivery (exposes the public VAPID key).
    pub push_delivery: PushDelivery,
}

impl AppState {
    /// Assembles the full dependency graph from configuration and an
    /// open connection pool.
    pub async fn build(config: AppConfig, db_pool: PgPool) -> AppResult<Self> {
        let config = Arc::new(config);

        // Repositories
        let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
        let interest_repo = Arc::new(InterestRepository::new(db_pool.clone()));
        let message_repo = Arc::new(MessageRepository::new(db_pool.clone()));
        let notification_repo = Arc::new(NotificationRepository::new(db_pool.clone()));
        let view_repo = Arc::new(ProfileViewRepository::new(db_pool.clone()));
        let question_repo = Arc::new(QuestionRepository::new(db_pool.clone()));
        let push_repo = Arc::new(PushSubscriptionRepository::new(db_pool.clone()));

        // Auth
        let jwt_encoder = JwtEncoder::new(&config.auth);
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
        let hasher = PasswordHasher::new();
        let password_policy = PasswordValidator::new(&config.auth);

        // Storage
        let file_store = sangam_storage::select_store(&config.storage, &config.server).await?;

        // Realtime and fan-out
        let realtime = RealtimeEngine::new(config.realtime.clone());
        let push_delivery = PushDelivery::new(config.push.clone(), push_repo.clone());
        let notifier = Notifier::new(
            notification_repo.clone(),
            realtime.clone(),
            push_delivery.clone(),
        );

        // Services
        let account_service = Arc::new(AccountService::new(
            user_repo.clone(),
            hasher,
            password_policy,
            jwt_encoder,
            JwtDecoder::new(&config.auth),
        ));
        let profile_service = Arc::new(ProfileService::new(
            user_repo.clone(),
            view_repo,
            message_repo.clone(),
            notifier.clone(),
        ));
        let photo_service = Arc::new(PhotoService::new(
            user_repo.clone(),
            file_store.clone(),
            config.storage.max_upload_size_bytes,
        ));
        let interest_service = Arc::new(InterestService::new(
            interest_repo,
            user_repo.clone(),
            notifier.clone(),
        ));
        let conversation_service = Arc::new(ConversationService::new(
            message_repo,
            user_repo,
            notifier.clone(),
        ));
        let notification_service = Arc::new(NotificationService::new(notification_repo));
        let question_service = Arc::new(QuestionService::new(question_repo, notifier));
        let push_service = Arc::new(PushService::new(push_repo));

        Ok(Self {
            config,
            db_pool,
            file_store,
            jwt_decoder,
            realtime,
            account_service,
            profile_service,
            photo_service,
            interest_service,
            conversation_service,
            notification_service,
            question_service,
            push_service,
            push_delivery,
        })
    }
}
