//! Local stand-in for the flight and news providers.
//!
//! Serves simulated content in the providers' wire formats so the feeds can
//! be exercised end to end without real API keys.

use std::collections::HashMap;

use aerolink_models::{FeedItem, FeedKind, WireArticle, WireFlight};
use aerolink_sdk::simulate;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::Utc;
use serde_json::{json, Value};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_ADDR: &str = "0.0.0.0:4100";
const MAX_LIMIT: usize = 500;

#[derive(Debug, Clone, Copy)]
struct MockState {
    seed: u64,
    count: usize,
}

impl Default for MockState {
    fn default() -> Self {
        Self { seed: 1903, count: 12 }
    }
}

type Params = HashMap<String, String>;

fn app(state: MockState) -> Router {
    Router::new()
        .route("/v1/flights", get(flights))
        .route("/v2/top-headlines", get(headlines))
        .route("/v1/broken", get(broken))
        .with_state(state)
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let addr = std::env::var("MOCK_FEED_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %listener.local_addr()?, "mock feed listening");
    axum::serve(listener, app(MockState::default())).await
}

// --- Endpoints ---

async fn flights(State(state): State<MockState>, Query(params): Query<Params>) -> Response {
    if let Err(denied) = require_key(&params, "access_key") {
        return denied;
    }
    let data: Vec<WireFlight> = items(state, &params, FeedKind::Flights)
        .iter()
        .filter_map(|item| match item {
            FeedItem::Flight(f) => Some(WireFlight::from(f)),
            FeedItem::Article(_) => None,
        })
        .collect();
    info!(count = data.len(), "served flights");
    Json(json!({
        "pagination": { "limit": data.len(), "offset": 0, "count": data.len() },
        "data": data,
    }))
    .into_response()
}

async fn headlines(State(state): State<MockState>, Query(params): Query<Params>) -> Response {
    if let Err(denied) = require_key(&params, "apiKey") {
        return denied;
    }
    let articles: Vec<WireArticle> = items(state, &params, FeedKind::News)
        .iter()
        .filter_map(|item| match item {
            FeedItem::Article(a) => Some(WireArticle::from(a)),
            FeedItem::Flight(_) => None,
        })
        .collect();
    info!(count = articles.len(), "served headlines");
    Json(json!({
        "status": "ok",
        "totalResults": articles.len(),
        "articles": articles,
    }))
    .into_response()
}

/// Well-formed JSON with the item list in the wrong shape.
async fn broken() -> Json<Value> {
    Json(json!({ "data": { "error": "upstream exploded" } }))
}

// --- Helpers ---

fn require_key(params: &Params, name: &str) -> Result<(), Response> {
    match params.get(name).map(|k| k.trim()) {
        Some(key) if !key.is_empty() => Ok(()),
        _ => {
            warn!(param = name, "request without api key");
            Err((
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": format!("missing {name}") })),
            )
                .into_response())
        }
    }
}

/// `seed` and `limit` query parameters override the server defaults.
fn items(state: MockState, params: &Params, kind: FeedKind) -> Vec<FeedItem> {
    let seed = params
        .get("seed")
        .and_then(|s| s.parse().ok())
        .unwrap_or(state.seed);
    let count = params
        .get("limit")
        .and_then(|s| s.parse().ok())
        .unwrap_or(state.count)
        .min(MAX_LIMIT);
    simulate(kind, seed, count, Utc::now())
}
