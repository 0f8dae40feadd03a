//! Route definitions for the LabDesk HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`. The
//! router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(user_routes())
        .merge(announcement_routes())
        .merge(endorsement_routes())
        .merge(qc_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Login, profile, and account management endpoints.
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/login", post(handlers::user::login))
        .route("/users/register", post(handlers::user::register))
        .route("/users/me", get(handlers::user::me))
        .route("/users", get(handlers::user::list_users))
        .route("/users", post(handlers::user::register))
        .route("/users/{id}", put(handlers::user::update_user))
        .route("/users/{id}", delete(handlers::user::delete_user))
}

/// Announcement board endpoints.
fn announcement_routes() -> Router<AppState> {
    Router::new()
        .route("/announcements", get(handlers::announcement::list))
        .route("/announcements", post(handlers::announcement::create))
        .route("/announcements/{id}", get(handlers::announcement::get))
        .route("/announcements/{id}", put(handlers::announcement::update))
        .route(
            "/announcements/{id}/archive",
            put(handlers::announcement::toggle_archive),
        )
        .route(
            "/announcements/{id}",
            delete(handlers::announcement::delete),
        )
        .route(
            "/announcements/{id}/comments",
            get(handlers::announcement::list_comments),
        )
        .route(
            "/announcements/{id}/comments",
            post(handlers::announcement::add_comment),
        )
}

/// Endorsement ticket endpoints.
fn endorsement_routes() -> Router<AppState> {
    Router::new()
        .route("/endorsements", get(handlers::endorsement::list))
        .route("/endorsements", post(handlers::endorsement::create))
        .route("/endorsements/{id}", get(handlers::endorsement::get))
        .route("/endorsements/{id}", put(handlers::endorsement::update))
        .route("/endorsements/{id}", delete(handlers::endorsement::delete))
        .route(
            "/endorsements/{id}/close",
            put(handlers::endorsement::close),
        )
        .route(
            "/endorsements/{id}/reopen",
            put(handlers::endorsement::reopen),
        )
        .route(
            "/endorsements/{id}/comments",
            get(handlers::endorsement::list_comments),
        )
        .route(
            "/endorsements/{id}/comments",
            post(handlers::endorsement::add_comment),
        )
        .route(
            "/endorsements/{id}/comments/{comment_id}",
            put(handlers::endorsement::edit_comment),
        )
        .route(
            "/endorsements/{id}/comments/{comment_id}/history",
            get(handlers::endorsement::comment_history),
        )
}

/// QC test board endpoints.
fn qc_routes() -> Router<AppState> {
    Router::new()
        .route("/qctests", get(handlers::qc_test::list))
        .route("/qctests", post(handlers::qc_test::upsert))
        .route("/qctests/reset", post(handlers::qc_test::reset_all))
        .route("/qctests/{id}", delete(handlers::qc_test::delete))
}

/// Health check endpoint (no auth required).
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}

/// Build CORS layer from configuration.
fn build_cors_layer(state: &AppState) -> CorsLayer {
    use http::Method;
    use tower_http::cors::Any;

    let cors_config = &state.config.server.cors;

    let mut cors = CorsLayer::new();

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<http::HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    let methods: Vec<Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = cors.allow_methods(methods);

    if cors_config.allowed_headers.contains(&"*".to_string()) {
        cors = cors.allow_headers(Any);
    }

    cors = cors.max_age(std::time::Duration::from_secs(cors_config.max_age_seconds));

    cors
}
