//! HTTP routes
//!
//! Page routes serve the embedded site shells; `/api/*` carries the JSON the
//! shells render. Admin CRUD is a validated pass-through to the content
//! store.

pub mod admin;
pub mod api;
pub mod pages;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::SharedState;

/// Create the gateway router
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        // Site pages
        .route("/", get(pages::home))
        .route("/explore", get(pages::explore))
        .route("/about", get(pages::about))
        .route("/admin/conteudos", get(pages::admin))
        // Gallery API
        .route("/api/status", get(api::status))
        .route("/api/explore", get(api::explore))
        .route("/api/explore/:id", get(api::content_detail))
        .route("/api/likes/:id", get(api::like_state))
        .route("/api/likes/:id/toggle", post(api::like_toggle))
        // Admin CRUD API (proxied to the content store)
        .route("/api/conteudos", get(admin::list).post(admin::create))
        .route(
            "/api/conteudos/:id",
            get(admin::get_one).put(admin::update).delete(admin::remove),
        )
        // Health check
        .route("/health", get(health))
        // Static assets
        .nest_service("/static", tower_http::services::ServeDir::new("static"))
        .with_state(state)
}

/// Health check endpoint
async fn health() -> &'static str {
    "OK"
}
