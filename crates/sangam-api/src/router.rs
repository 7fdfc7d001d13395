//! Route table and middleware stack.

use std::time::Duration;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderValue, Method};
use axum::routing::{delete, get, post, put};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use sangam_core::config::CorsConfig;
use sangam_core::error::AppError;

use crate::error::ApiError;
use crate::handlers;
use crate::middleware::request_logging;
use crate::state::AppState;

/// Builds the full application router.
pub fn build_router(state: AppState) -> Router {
    let auth_routes = Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login))
        .route("/refresh", post(handlers::auth::refresh))
        .route("/change-password", post(handlers::auth::change_password));

    let profile_routes = Router::new()
        .route(
            "/me",
            get(handlers::profile::me)
                .put(handlers::profile::update)
                .delete(handlers::profile::deactivate),
        )
        .route("/me/viewers", get(handlers::profile::viewers))
        .route(
            "/me/photos",
            post(handlers::photo::upload).get(handlers::photo::list),
        )
        .route("/me/photos/{id}", delete(handlers::photo::delete))
        .route("/me/photos/{id}/primary", put(handlers::photo::set_primary))
        .route("/{id}", get(handlers::profile::view))
        .route("/", get(handlers::profile::browse));

    let interest_routes = Router::new()
        .route("/", post(handlers::interest::send))
        .route("/incoming", get(handlers::interest::incoming))
        .route("/outgoing", get(handlers::interest::outgoing))
        .route("/{id}/accept", post(handlers::interest::accept))
        .route("/{id}/reject", post(handlers::interest::reject));

    let message_routes = Router::new()
        .route("/", post(handlers::message::send))
        .route("/conversations", get(handlers::message::inbox))
        .route(
            "/conversations/{user_id}",
            get(handlers::message::conversation),
        )
        .route(
            "/conversations/{user_id}/read",
            put(handlers::message::mark_read),
        )
        .route("/unread-count", get(handlers::message::unread_count));

    let notification_routes = Router::new()
        .route("/", get(handlers::notification::list))
        .route(
            "/unread-count",
            get(handlers::notification::unread_count),
        )
        .route("/read-all", put(handlers::notification::mark_all_read))
        .route("/{id}/read", put(handlers::notification::mark_read))
        .route("/{id}", delete(handlers::notification::delete));

    let question_routes = Router::new()
        .route(
            "/",
            post(handlers::question::ask).get(handlers::question::list),
        )
        .route(
            "/{id}",
            get(handlers::question::get)
                .put(handlers::question::update)
                .delete(handlers::question::delete),
        )
        .route("/{id}/answers", post(handlers::question::answer))
        .route("/{id}/vote", post(handlers::question::vote));

    let answer_routes = Router::new().route("/{id}/vote", post(handlers::question::vote_answer));

    let push_routes = Router::new()
        .route("/vapid-key", get(handlers::push::vapid_key))
        .route("/subscribe", post(handlers::push::subscribe))
        .route("/unsubscribe", post(handlers::push::unsubscribe))
        .route("/subscriptions", get(handlers::push::list));

    let api = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/ws", get(handlers::ws::upgrade))
        .nest("/auth", auth_routes)
        .nest("/profiles", profile_routes)
        .nest("/interests", interest_routes)
        .nest("/messages", message_routes)
        .nest("/notifications", notification_routes)
        .nest("/questions", question_routes)
        .nest("/answers", answer_routes)
        .nest("/push", push_routes);

    let upload_prefix = state.config.storage.local.url_prefix.clone();
    let upload_root = state.config.storage.local.upload_root.clone();
    let max_upload = state.config.storage.max_upload_size_bytes as usize;
    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api)
        .nest_service(&upload_prefix, ServeDir::new(upload_root))
        .fallback(fallback)
        .layer(axum::middleware::from_fn(request_logging))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(cors)
        .with_state(state)
}

/// Uniform JSON 404 for unmatched routes.
async fn fallback() -> ApiError {
    ApiError(AppError::not_found("Resource not found"))
}

/// Builds the CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins = if config.allowed_origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(
            config
                .allowed_origins
                .iter()
                .filter_map(|o| o.parse::<HeaderValue>().ok()),
        )
    };

    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();

    let headers = if config.allowed_headers.iter().any(|h| h == "*") {
        AllowHeaders::any()
    } else {
        AllowHeaders::list(
            config
                .allowed_headers
                .iter()
                .filter_map(|h| h.parse().ok()),
        )
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(methods)
        .allow_headers(headers)
        .max_age(Duration::from_secs(config.max_age_seconds))
}
