//! Fetch-with-fallback content pipeline.
//!
//! [`ContentFeed`] performs one HTTP GET against a [`RemoteSpec`] and
//! normalises the response into a [`FeedSnapshot`]. Any failure along the
//! way (transport, timeout, status, body shape) degrades to a simulated
//! snapshot; the [`Provenance`] tag is the only signal of degradation.
//!
//! # Typical usage
//!
//! ```rust,no_run
//! use aerolink_models::FeedKind;
//! use aerolink_sdk::{ContentFeed, FeedConfig, RemoteSpec};
//!
//! # async fn run() -> Result<(), aerolink_sdk::SdkError> {
//! let feed = ContentFeed::new(FeedConfig::default())?;
//! let source = RemoteSpec::new(FeedKind::Flights, "http://api.aviationstack.com/v1/flights")
//!     .param("access_key", "YOUR_API_KEY");
//!
//! let snapshot = feed.load(&source, 73, 8).await;
//! if snapshot.is_simulated() {
//!     println!("showing simulated flights");
//! }
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use aerolink_models::{FeedItem, FeedKind, FeedSnapshot, Provenance, WireArticle, WireFlight};
use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::{FeedFailure, SdkError};
use crate::simulator::simulate;

/// Request timeout applied when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
/// Maximum number of live items kept in a snapshot by default.
pub const DEFAULT_DISPLAY_CAP: usize = 50;

/// Source of "now" for snapshot and fallback timestamps.
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

// ---------------------------------------------------------------------------
// RemoteSpec
// ---------------------------------------------------------------------------

/// Remote endpoint descriptor: URL plus query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteSpec {
    kind: FeedKind,
    url: String,
    params: Vec<(String, String)>,
}

impl RemoteSpec {
    pub fn new(kind: FeedKind, url: impl Into<String>) -> Self {
        Self {
            kind,
            url: url.into(),
            params: Vec::new(),
        }
    }

    /// Append a query-string parameter (e.g. an API key).
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    pub fn kind(&self) -> FeedKind {
        self.kind
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// The full request URL with the query string applied.
    pub fn request_url(&self) -> Result<reqwest::Url, FeedFailure> {
        reqwest::Url::parse_with_params(&self.url, &self.params)
            .map_err(|e| FeedFailure::Network(format!("invalid endpoint URL {}: {e}", self.url)))
    }
}

impl fmt::Display for RemoteSpec {
    /// Prints kind and URL only; parameter values may hold credentials.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} feed at {}", self.kind, self.url)
    }
}

// ---------------------------------------------------------------------------
// FeedConfig
// ---------------------------------------------------------------------------

/// Tunables for [`ContentFeed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedConfig {
    /// Upper bound on the whole request, connect through body.
    pub timeout: Duration,
    /// Live responses are cut to their first `display_cap` valid items.
    pub display_cap: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            display_cap: DEFAULT_DISPLAY_CAP,
        }
    }
}

// ---------------------------------------------------------------------------
// ContentFeed
// ---------------------------------------------------------------------------

/// Loads feed snapshots from a remote endpoint, falling back to simulated
/// content.
#[derive(Clone)]
pub struct ContentFeed {
    http: reqwest::Client,
    display_cap: usize,
    clock: Clock,
}

impl ContentFeed {
    /// Build a feed with its own HTTP client.
    pub fn new(config: FeedConfig) -> Result<Self, SdkError> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http,
            display_cap: config.display_cap,
            clock: Arc::new(Utc::now),
        })
    }

    /// Replace the wall clock, e.g. to make fallback timestamps
    /// reproducible.
    #[must_use]
    pub fn with_clock(mut self, clock: impl Fn() -> DateTime<Utc> + Send + Sync + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn display_cap(&self) -> usize {
        self.display_cap
    }

    /// Load a snapshot for `source`.
    ///
    /// Makes a single request, without retry. On any failure the snapshot
    /// is [`Provenance::Simulated`] and holds exactly `fallback_count` items
    /// generated from `fallback_seed`. Never fails.
    pub async fn load(
        &self,
        source: &RemoteSpec,
        fallback_seed: u64,
        fallback_count: usize,
    ) -> FeedSnapshot {
        match self.try_fetch(source).await {
            Ok(items) => {
                info!(source = %source, items = items.len(), "live feed loaded");
                FeedSnapshot::new(source.kind(), Provenance::Live, (self.clock)(), items)
            }
            Err(failure) => {
                warn!(
                    source = %source,
                    error = %failure,
                    fallback_count,
                    "feed unavailable, serving simulated content"
                );
                self.simulated(source.kind(), fallback_seed, fallback_count)
            }
        }
    }

    /// Fetch and normalise live items, reporting why the fetch failed.
    pub async fn try_fetch(&self, source: &RemoteSpec) -> Result<Vec<FeedItem>, FeedFailure> {
        let url = source.request_url()?;
        debug!(source = %source, "requesting feed");

        let res = self.http.get(url).send().await?;
        if !res.status().is_success() {
            return Err(FeedFailure::Status(res.status().as_u16()));
        }
        let body = res.bytes().await?;

        parse_payload(source.kind(), &body, self.display_cap, (self.clock)())
    }

    /// A simulated snapshot stamped with the current clock reading.
    pub fn simulated(&self, kind: FeedKind, seed: u64, count: usize) -> FeedSnapshot {
        let anchor = (self.clock)();
        FeedSnapshot::new(kind, Provenance::Simulated, anchor, simulate(kind, seed, count, anchor))
    }
}

/// Normalise a raw response body.
///
/// The body must be a JSON object whose `kind.payload_field()` member is an
/// array; anything else is [`FeedFailure::MalformedPayload`]. Array elements
/// that fail validation are skipped, but a non-empty array with no valid
/// element at all is malformed too. At most `cap` items are returned, in
/// received order.
pub fn parse_payload(
    kind: FeedKind,
    body: &[u8],
    cap: usize,
    received_at: DateTime<Utc>,
) -> Result<Vec<FeedItem>, FeedFailure> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| FeedFailure::MalformedPayload(format!("body is not JSON: {e}")))?;
    let Value::Object(mut object) = value else {
        return Err(FeedFailure::MalformedPayload(
            "body is not a JSON object".into(),
        ));
    };
    let field = kind.payload_field();
    let Some(Value::Array(raw)) = object.remove(field) else {
        return Err(FeedFailure::MalformedPayload(format!(
            "missing `{field}` array"
        )));
    };

    let received = raw.len();
    let mut items = Vec::with_capacity(received.min(cap));
    let mut skipped = 0usize;
    for element in raw {
        if items.len() == cap {
            break;
        }
        match normalise(kind, element, received_at) {
            Ok(item) => items.push(item),
            Err(reason) => {
                skipped += 1;
                debug!(kind = %kind, %reason, "skipping invalid feed item");
            }
        }
    }
    if skipped > 0 {
        debug!(kind = %kind, skipped, kept = items.len(), "dropped invalid feed items");
    }
    if items.is_empty() && received > 0 && cap > 0 {
        return Err(FeedFailure::MalformedPayload(format!(
            "no valid items in `{field}` array"
        )));
    }
    Ok(items)
}

fn normalise(kind: FeedKind, element: Value, received_at: DateTime<Utc>) -> Result<FeedItem, String> {
    match kind {
        FeedKind::Flights => serde_json::from_value::<WireFlight>(element)
            .map_err(|e| e.to_string())?
            .into_record(received_at)
            .map(FeedItem::from)
            .map_err(|e| e.to_string()),
        FeedKind::News => serde_json::from_value::<WireArticle>(element)
            .map_err(|e| e.to_string())?
            .into_article(received_at)
            .map(FeedItem::from)
            .map_err(|e| e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;

    fn fixed_now() -> DateTime<Utc> {
        "2026-10-16T09:00:00Z".parse().unwrap()
    }

    fn feed(config: FeedConfig) -> ContentFeed {
        ContentFeed::new(config).unwrap().with_clock(fixed_now)
    }

    fn flight_json(i: usize) -> Value {
        json!({
            "flight_status": "active",
            "flight": { "icao": format!("TST{i}") },
            "live": {
                "latitude": 10.0,
                "longitude": 20.0,
                "altitude": 10000.0,
                "direction": 90.0,
                "speed_horizontal": 800.0
            }
        })
    }

    /// Serve `router` on an ephemeral local port and return its base URL.
    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    /// A local URL nothing is listening on.
    async fn dead_url() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{addr}/flights")
    }

    fn test_router() -> Router {
        Router::new()
            .route(
                "/flights",
                get(|| async {
                    let data: Vec<Value> = (0..10_000).map(flight_json).collect();
                    Json(json!({ "data": data }))
                }),
            )
            .route("/not-array", get(|| async { Json(json!({ "data": { "0": 1 } })) }))
            .route("/wrong-field", get(|| async { Json(json!({ "articles": [] })) }))
            .route(
                "/junk",
                get(|| async { Json(json!({ "data": [1, "x", null, { "foo": 2 }] })) }),
            )
            .route(
                "/no-live",
                get(|| async {
                    Json(json!({ "data": [
                        { "flight": { "icao": "AFR1" }, "live": null },
                        { "flight": { "icao": "AFR2" }, "live": null }
                    ] }))
                }),
            )
            .route("/not-json", get(|| async { "<html>maintenance</html>" }))
            .route(
                "/error",
                get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
            )
            .route(
                "/slow",
                get(|| async {
                    tokio::time::sleep(Duration::from_secs(5)).await;
                    Json(json!({ "data": [] }))
                }),
            )
            .route(
                "/keyed",
                get(
                    |axum::extract::RawQuery(query): axum::extract::RawQuery| async move {
                        if query.as_deref() == Some("access_key=KEY123") {
                            (StatusCode::OK, Json(json!({ "data": [flight_json(1)] })))
                        } else {
                            (StatusCode::UNAUTHORIZED, Json(json!({ "error": "no key" })))
                        }
                    },
                ),
            )
    }

    #[tokio::test]
    async fn live_payload_truncated_to_cap_in_order() {
        let base = serve(test_router()).await;
        let source = RemoteSpec::new(FeedKind::Flights, format!("{base}/flights"));
        let snap = feed(FeedConfig::default()).load(&source, 1, 8).await;

        assert_eq!(snap.provenance(), Provenance::Live);
        assert_eq!(snap.len(), 50);
        let ids: Vec<_> = snap.items().iter().map(FeedItem::identifier).collect();
        let expected: Vec<_> = (0..50).map(|i| format!("TST{i}")).collect();
        assert_eq!(ids, expected);
    }

    #[tokio::test]
    async fn every_failure_mode_falls_back_with_exact_count() {
        let base = serve(test_router()).await;
        let config = FeedConfig {
            timeout: Duration::from_millis(300),
            ..FeedConfig::default()
        };
        let feed = feed(config);
        let urls = [
            format!("{base}/not-array"),
            format!("{base}/wrong-field"),
            format!("{base}/junk"),
            format!("{base}/no-live"),
            format!("{base}/not-json"),
            format!("{base}/error"),
            format!("{base}/slow"),
            format!("{base}/missing-route"),
            dead_url().await,
            "not a url".to_string(),
        ];
        for url in urls {
            let source = RemoteSpec::new(FeedKind::Flights, url.clone());
            let snap = feed.load(&source, 9, 6).await;
            assert_eq!(snap.provenance(), Provenance::Simulated, "{url}");
            assert_eq!(snap.len(), 6, "{url}");
        }
    }

    #[tokio::test]
    async fn try_fetch_reports_failure_kind() {
        let base = serve(test_router()).await;
        let feed = feed(FeedConfig::default());

        let err = feed
            .try_fetch(&RemoteSpec::new(FeedKind::Flights, format!("{base}/error")))
            .await
            .unwrap_err();
        assert_eq!(err, FeedFailure::Status(500));

        let err = feed
            .try_fetch(&RemoteSpec::new(FeedKind::Flights, format!("{base}/wrong-field")))
            .await
            .unwrap_err();
        assert_eq!(err, FeedFailure::MalformedPayload("missing `data` array".into()));

        let err = feed
            .try_fetch(&RemoteSpec::new(FeedKind::Flights, dead_url().await))
            .await
            .unwrap_err();
        assert!(matches!(err, FeedFailure::Network(_)));
    }

    #[tokio::test]
    async fn query_parameters_reach_the_endpoint() {
        let base = serve(test_router()).await;
        let feed = feed(FeedConfig::default());

        let keyed = RemoteSpec::new(FeedKind::Flights, format!("{base}/keyed"))
            .param("access_key", "KEY123");
        assert_eq!(feed.load(&keyed, 0, 3).await.provenance(), Provenance::Live);

        let unkeyed = RemoteSpec::new(FeedKind::Flights, format!("{base}/keyed"));
        let snap = feed.load(&unkeyed, 0, 3).await;
        assert_eq!(snap.provenance(), Provenance::Simulated);
        assert_eq!(snap.len(), 3);
    }

    #[tokio::test]
    async fn fallback_is_deterministic_for_a_seed() {
        let feed = feed(FeedConfig::default());
        let source = RemoteSpec::new(FeedKind::News, dead_url().await);
        let a = feed.load(&source, 2026, 10).await;
        let b = feed.load(&source, 2026, 10).await;
        assert_eq!(a, b);
        assert!(a.is_simulated());
        assert_eq!(a.generated_at(), fixed_now());
    }

    #[test]
    fn parse_payload_skips_invalid_elements() {
        let body = json!({
            "articles": [
                { "title": "First" },
                { "title": "" },
                { "title": "[Removed]" },
                { "title": "Bad score", "credibility": 140.0 },
                "not an object",
                { "title": "Second", "source": { "name": "AeroTime" } }
            ]
        });
        let items = parse_payload(
            FeedKind::News,
            body.to_string().as_bytes(),
            10,
            fixed_now(),
        )
        .unwrap();
        let ids: Vec<_> = items.iter().map(FeedItem::identifier).collect();
        assert_eq!(ids, ["First", "Second"]);
        assert_eq!(items[0].timestamp(), fixed_now());
    }

    #[test]
    fn parse_payload_rejects_array_without_valid_elements() {
        let junk = br#"{"data": [1, "x", null, {"foo": 2}]}"#;
        assert!(matches!(
            parse_payload(FeedKind::Flights, junk, 50, fixed_now()),
            Err(FeedFailure::MalformedPayload(_))
        ));
    }

    #[test]
    fn parse_payload_rejects_flights_without_live_block() {
        let body = json!({
            "data": [
                { "flight_status": "scheduled", "flight": { "icao": "AFR1" }, "live": null },
                { "flight_status": "scheduled", "flight": { "iata": "AF2" }, "live": null }
            ]
        });
        assert!(matches!(
            parse_payload(FeedKind::Flights, body.to_string().as_bytes(), 50, fixed_now()),
            Err(FeedFailure::MalformedPayload(_))
        ));

        // One usable flight is enough for a live result.
        let mut mixed = body;
        mixed["data"].as_array_mut().unwrap().push(flight_json(7));
        let items =
            parse_payload(FeedKind::Flights, mixed.to_string().as_bytes(), 50, fixed_now()).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].identifier(), "TST7");
    }

    #[test]
    fn parse_payload_empty_array_is_live_and_empty() {
        let items = parse_payload(FeedKind::Flights, br#"{"data": []}"#, 50, fixed_now()).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn parse_payload_rejects_top_level_array() {
        let err = parse_payload(FeedKind::Flights, b"[]", 50, fixed_now()).unwrap_err();
        assert_eq!(
            err,
            FeedFailure::MalformedPayload("body is not a JSON object".into())
        );
    }

    #[test]
    fn display_hides_parameters() {
        let spec = RemoteSpec::new(FeedKind::News, "https://newsapi.org/v2/top-headlines")
            .param("apiKey", "secret");
        assert_eq!(
            spec.to_string(),
            "news feed at https://newsapi.org/v2/top-headlines"
        );
        assert!(spec
            .request_url()
            .unwrap()
            .as_str()
            .ends_with("?apiKey=secret"));
    }
}
