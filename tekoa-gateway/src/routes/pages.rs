//! Site page handlers
//!
//! The shells are embedded at compile time; everything dynamic comes from
//! the JSON API.

use axum::response::{Html, IntoResponse};

/// Home page with the hero section
pub async fn home() -> impl IntoResponse {
    Html(include_str!("../../static/index.html"))
}

/// Explore gallery page
pub async fn explore() -> impl IntoResponse {
    Html(include_str!("../../static/explore.html"))
}

/// About page
pub async fn about() -> impl IntoResponse {
    Html(include_str!("../../static/about.html"))
}

/// Admin content table page
pub async fn admin() -> impl IntoResponse {
    Html(include_str!("../../static/admin.html"))
}
