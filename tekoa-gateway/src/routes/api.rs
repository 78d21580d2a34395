//! Gallery and like API handlers

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tekoa_client::Content;

use crate::error::Result;
use crate::likes::LikeEntry;
use crate::state::SharedState;
use crate::view::{self, ViewQuery};

/// Gateway status response
#[derive(Serialize)]
pub struct StatusResponse {
    pub service: &'static str,
    pub version: &'static str,
    pub backend_url: String,
    pub cached_items: usize,
    pub tracked_likes: usize,
}

/// GET /api/status
pub async fn status(State(state): State<SharedState>) -> Json<StatusResponse> {
    let state = state.read().await;

    Json(StatusResponse {
        service: "tekoa-gateway",
        version: env!("CARGO_PKG_VERSION"),
        backend_url: state.config.backend_url.clone(),
        cached_items: state.explore.len(),
        tracked_likes: state.likes.tracked(),
    })
}

/// One gallery card: the record plus its merged like state and label
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExploreItem {
    #[serde(flatten)]
    pub content: Content,
    pub liked: bool,
    pub likes: u64,
    pub type_label: &'static str,
}

#[derive(Serialize)]
pub struct ExploreResponse {
    pub items: Vec<ExploreItem>,
    pub total: usize,
}

/// GET /api/explore?filter=&search=&sort=&order=
///
/// Derives the view over the cached full list, refreshing it from the
/// content store when stale. A refresh that loses the race to a newer one
/// is discarded; a failed refresh surfaces as 502 and leaves the cached
/// list untouched.
pub async fn explore(
    State(state): State<SharedState>,
    Query(query): Query<ViewQuery>,
) -> Result<Json<ExploreResponse>> {
    let refresh = {
        let s = state.read().await;
        let ttl = std::time::Duration::from_secs(s.config.cache_ttl_secs);
        if s.explore.is_fresh(ttl) {
            None
        } else {
            Some((s.store.clone(), s.explore.begin_refresh()))
        }
    };

    if let Some((store, generation)) = refresh {
        let items = store.list().await?;
        let mut s = state.write().await;
        s.explore.apply(generation, items);
    }

    let s = state.read().await;
    let items: Vec<ExploreItem> = view::apply(s.explore.items(), &query)
        .into_iter()
        .map(|content| decorate(&s, content))
        .collect();

    Ok(Json(ExploreResponse {
        total: items.len(),
        items,
    }))
}

/// GET /api/explore/:id detail view for one record
pub async fn content_detail(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<Json<ExploreItem>> {
    let store = state.read().await.store.clone();
    let content = store.get(id).await?;

    let s = state.read().await;
    Ok(Json(decorate(&s, content)))
}

fn decorate(state: &crate::state::GatewayState, content: Content) -> ExploreItem {
    let entry = state.likes.get(
        &content.id.to_string(),
        content.likes_count.unwrap_or(0),
    );
    ExploreItem {
        liked: entry.liked,
        likes: entry.count,
        type_label: content.content_type.label(),
        content,
    }
}

#[derive(Deserialize, Default)]
pub struct SeedParam {
    /// Server-reported count used only on first observation of the id
    #[serde(default)]
    pub seed: u64,
}

/// GET /api/likes/:id?seed= reads current state; views re-read on mount
pub async fn like_state(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    Query(params): Query<SeedParam>,
) -> Json<LikeEntry> {
    let state = state.read().await;
    Json(state.likes.get(&id.to_string(), params.seed))
}

/// POST /api/likes/:id/toggle?seed=
pub async fn like_toggle(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    Query(params): Query<SeedParam>,
) -> Result<Json<LikeEntry>> {
    let mut state = state.write().await;
    let entry = state.likes.toggle(&id.to_string(), params.seed)?;
    Ok(Json(entry))
}
