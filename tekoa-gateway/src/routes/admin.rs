//! Admin CRUD handlers
//!
//! Validated pass-through to the content store. Drafts are checked here
//! before any request leaves the gateway; an invalid draft comes back as
//! 422 with the offending field and no network call is made.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use tekoa_client::{Content, ContentDraft};

use crate::error::{GatewayError, Result};
use crate::state::SharedState;
use crate::view::{self, ViewQuery};

#[derive(Serialize)]
pub struct AdminListResponse {
    pub items: Vec<Content>,
    pub total: usize,
}

/// GET /api/conteudos?filter=&search=&sort=&order=
///
/// The admin table reuses the same view engine as the gallery; with no
/// parameters this is the full list sorted by creation date.
pub async fn list(
    State(state): State<SharedState>,
    Query(query): Query<ViewQuery>,
) -> Result<Json<AdminListResponse>> {
    let store = state.read().await.store.clone();
    let items = store.list().await?;
    let items = view::apply(&items, &query);

    Ok(Json(AdminListResponse {
        total: items.len(),
        items,
    }))
}

/// GET /api/conteudos/:id
pub async fn get_one(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<Json<Content>> {
    let store = state.read().await.store.clone();
    let content = store.get(id).await?;
    Ok(Json(content))
}

/// POST /api/conteudos
pub async fn create(
    State(state): State<SharedState>,
    Json(draft): Json<ContentDraft>,
) -> Result<(StatusCode, Json<Content>)> {
    let store = state.read().await.store.clone();
    let created = store.create(&draft).await?;
    tracing::info!("content created: id={} title={:?}", created.id, created.title);
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/conteudos/:id
pub async fn update(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    Json(draft): Json<ContentDraft>,
) -> Result<Json<Content>> {
    let store = state.read().await.store.clone();
    let updated = store.update(id, &draft).await?;
    tracing::info!("content updated: id={}", id);
    Ok(Json(updated))
}

#[derive(Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
}

/// DELETE /api/conteudos/:id
pub async fn remove(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>> {
    let store = state.read().await.store.clone();
    let deleted = store.delete(id).await?;
    if !deleted {
        return Err(GatewayError::NotFound(id.to_string()));
    }
    tracing::info!("content deleted: id={}", id);
    Ok(Json(DeleteResponse { deleted }))
}
