//! JSON handlers mounted under `/api/v1`.

use super::error::WebError;
use super::params::{ListParams, SearchParams};
use super::AppState;
use crate::commands::stats::Stats;
use crate::model::ProverbEntry;
use crate::store::examples::ExampleStats;
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/proverbs", get(list))
        .route("/proverbs/random", get(random))
        .route("/proverbs/search", get(search))
        .route("/proverbs/stats", get(stats))
        .route("/proverbs/categories/{category}", get(by_category))
        .route("/proverbs/sources/{source}", get(by_source))
        .route("/proverbs/tags/{tag}", get(by_tag))
        .route("/proverbs/{id}", get(by_id))
        .route("/examples/stats", get(example_stats))
}

#[derive(Serialize)]
pub struct ListResponse {
    pub proverbs: Vec<ProverbEntry>,
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<ProverbEntry>,
    pub count: usize,
}

#[derive(Serialize)]
pub struct CategoryResponse {
    pub category: String,
    pub proverbs: Vec<ProverbEntry>,
    pub count: usize,
}

#[derive(Serialize)]
pub struct SourceResponse {
    pub source: String,
    pub proverbs: Vec<ProverbEntry>,
    pub count: usize,
}

#[derive(Serialize)]
pub struct TagResponse {
    pub tag: String,
    pub proverbs: Vec<ProverbEntry>,
    pub count: usize,
}

/// GET /api/v1/proverbs
async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ListResponse>, WebError> {
    let page = params.page();
    let result = state.api.list(&params.filter(), page)?;
    Ok(Json(ListResponse {
        proverbs: result.listed,
        total: result.total,
        limit: page.limit,
        offset: page.offset,
    }))
}

/// GET /api/v1/proverbs/random
async fn random(State(state): State<AppState>) -> Json<ProverbEntry> {
    Json(state.api.random(&mut rand::thread_rng()))
}

/// GET /api/v1/proverbs/search
async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, WebError> {
    let query = params.query().to_string();
    let result = state.api.search(&query)?;
    Ok(Json(SearchResponse {
        query,
        count: result.listed.len(),
        results: result.listed,
    }))
}

/// GET /api/v1/proverbs/stats
async fn stats(State(state): State<AppState>) -> Json<Stats> {
    Json(state.api.stats())
}

async fn by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<CategoryResponse>, WebError> {
    let result = state.api.by_category(&category)?;
    Ok(Json(CategoryResponse {
        category,
        count: result.listed.len(),
        proverbs: result.listed,
    }))
}

async fn by_source(
    State(state): State<AppState>,
    Path(source): Path<String>,
) -> Result<Json<SourceResponse>, WebError> {
    let result = state.api.by_source(&source)?;
    Ok(Json(SourceResponse {
        source,
        count: result.listed.len(),
        proverbs: result.listed,
    }))
}

async fn by_tag(
    State(state): State<AppState>,
    Path(tag): Path<String>,
) -> Result<Json<TagResponse>, WebError> {
    let result = state.api.by_tag(&tag)?;
    Ok(Json(TagResponse {
        tag,
        count: result.listed.len(),
        proverbs: result.listed,
    }))
}

/// GET /api/v1/proverbs/{id}
async fn by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProverbEntry>, WebError> {
    state
        .api
        .find(&id)
        .map(Json)
        .ok_or(WebError::NotFound(id))
}

async fn example_stats(State(state): State<AppState>) -> Json<ExampleStats> {
    Json(state.api.example_stats())
}
