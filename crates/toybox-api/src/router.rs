//! Route definitions for the Toybox HTTP API.
//!
//! Domain routes are mounted under `/api`; the health probe sits at the
//! root. The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::{
    Router, middleware as axum_middleware,
    routing::{delete, get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(toy_routes())
        .merge(auth_routes())
        .merge(user_routes());

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .route("/health", get(handlers::health::health))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Toy catalog, stats and message endpoints
fn toy_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/toy",
            get(handlers::toy::query_toys).post(handlers::toy::add_toy),
        )
        .route("/toy/dashboard", get(handlers::toy::get_stats))
        .route("/toy/labels", get(handlers::toy::get_labels))
        .route("/toy/labels/count", get(handlers::toy::get_labels_count))
        .route(
            "/toy/{toy_id}",
            get(handlers::toy::get_toy)
                .put(handlers::toy::update_toy)
                .delete(handlers::toy::remove_toy),
        )
        .route("/toy/{toy_id}/msg", post(handlers::toy::add_message))
        .route(
            "/toy/{toy_id}/msg/{msg_id}",
            delete(handlers::toy::remove_message),
        )
}

/// Signup, login, logout
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(handlers::auth::signup))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/logout", post(handlers::auth::logout))
}

/// User directory
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/user", get(handlers::user::list_users))
        .route(
            "/user/{id}",
            get(handlers::user::get_user)
                .put(handlers::user::update_user)
                .delete(handlers::user::remove_user),
        )
}
