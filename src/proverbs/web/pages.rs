//! Server-rendered HTML pages.

use super::error::PageError;
use super::params::SearchParams;
use super::AppState;
use crate::model::{Category, ProverbEntry, Source};
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};
use chrono::{Datelike, Utc};
use minijinja::{context, Value};
use tracing::debug;

const HOME_PER_SOURCE: usize = 5;

type PageResult = Result<Html<String>, PageError>;

fn render(
    state: &AppState,
    template: &str,
    title: String,
    description: String,
    extra: Value,
) -> PageResult {
    debug!(template, %title, "rendering page");
    let ctx = context! {
        title,
        description,
        current_year => Utc::now().year(),
        ..extra
    };
    Ok(Html(state.pages.render(template, &ctx)?))
}

pub async fn index(State(state): State<AppState>) -> PageResult {
    let first = |source: &Source| -> Result<Vec<ProverbEntry>, PageError> {
        let mut listed = state.api.by_source(source.as_str())?.listed;
        listed.truncate(HOME_PER_SOURCE);
        Ok(listed)
    };
    let official = first(&Source::Official)?;
    let community = first(&Source::Community)?;

    render(
        &state,
        "index.html",
        "Go Proverbs: Official & Community Edition".into(),
        "A comprehensive collection of Go programming wisdom".into(),
        context! { stats => state.api.stats(), official, community },
    )
}

pub async fn proverb(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let detail = match state.api.get(&id) {
        Ok(detail) => detail,
        Err(crate::error::ProverbsError::NotFound(_)) => return not_found(&state, &id),
        Err(e) => return PageError::from(e).into_response(),
    };

    let title = detail.entry.proverb.title.clone();
    let description = detail.entry.proverb.text.clone();
    render(
        &state,
        "proverb.html",
        title,
        description,
        context! {
            proverb => detail.entry,
            related => detail.related,
            previous => detail.previous,
            next => detail.next,
        },
    )
    .into_response()
}

fn not_found(state: &AppState, id: &str) -> Response {
    match render(
        state,
        "not_found.html",
        "Not found - Go Proverbs".into(),
        String::new(),
        context! { id },
    ) {
        Ok(page) => (StatusCode::NOT_FOUND, page).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn categories(State(state): State<AppState>) -> PageResult {
    let stats = state.api.stats();
    let categories: Vec<(String, usize)> = Category::ALL
        .iter()
        .map(|c| (c.to_string(), stats.categories.get(c).copied().unwrap_or(0)))
        .collect();

    render(
        &state,
        "categories.html",
        "Categories - Go Proverbs".into(),
        "Browse Go proverbs by category".into(),
        context! { categories },
    )
}

pub async fn category(State(state): State<AppState>, Path(category): Path<String>) -> PageResult {
    let proverbs = state.api.by_category(&category)?.listed;
    let label = super::templates::format_category(category.clone());
    render(
        &state,
        "category.html",
        format!("{} - Go Proverbs", label),
        format!("Go proverbs about {}", category),
        context! { category, proverbs },
    )
}

pub async fn tags(State(state): State<AppState>) -> PageResult {
    let tags: Vec<(String, usize)> = state.api.stats().tags.into_iter().collect();
    render(
        &state,
        "tags.html",
        "All Tags - Go Proverbs".into(),
        "Browse Go proverbs by tags".into(),
        context! { tags },
    )
}

pub async fn tag(State(state): State<AppState>, Path(tag): Path<String>) -> PageResult {
    let proverbs = state.api.by_tag(&tag)?.listed;
    render(
        &state,
        "tag.html",
        format!("Tag: {} - Go Proverbs", tag),
        format!("Go proverbs tagged with {}", tag),
        context! { tag, proverbs },
    )
}

pub async fn source(State(state): State<AppState>, Path(source): Path<String>) -> PageResult {
    let proverbs = state.api.by_source(&source)?.listed;
    let label = super::templates::format_source(source.clone());
    render(
        &state,
        "source.html",
        format!("{} Proverbs - Go Proverbs", label),
        format!("{} Go proverbs", label),
        context! { source, proverbs },
    )
}

pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> PageResult {
    let query = params.query().to_string();
    let proverbs = state.api.search(&query)?.listed;
    render(
        &state,
        "search.html",
        format!("Search: {} - Go Proverbs", query),
        format!("Search results for '{}'", query),
        context! { query, proverbs },
    )
}

/// 302 to a random proverb, or home when there is none.
pub async fn random(State(state): State<AppState>) -> Response {
    let entry = state.api.random(&mut rand::thread_rng());
    let location = if entry.is_empty() {
        "/".to_string()
    } else {
        format!("/proverbs/{}", entry.id)
    };
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}
