//! Runtime configuration.
//!
//! Endpoints, credentials and tunables are read from environment variables
//! at startup. Binaries may override individual fields from command-line
//! flags afterwards.

use std::str::FromStr;
use std::time::Duration;

use aerolink_models::FeedKind;

use crate::feed::{FeedConfig, RemoteSpec, DEFAULT_DISPLAY_CAP, DEFAULT_TIMEOUT};
use crate::responder::DEFAULT_THRESHOLD;

/// Placeholder credential sent when no API key is configured.
pub const PLACEHOLDER_KEY: &str = "YOUR_API_KEY";

/// Everything a front end needs to run the feeds and the assistant.
#[derive(Debug, Clone, PartialEq)]
pub struct AeroLinkConfig {
    pub flights: RemoteSpec,
    pub news: RemoteSpec,
    pub feed: FeedConfig,
    /// Items generated when a feed falls back to simulation.
    pub fallback_count: usize,
    /// Seed for simulated content.
    pub fallback_seed: u64,
    /// Minimum assistant match score (exclusive).
    pub match_threshold: f64,
}

impl AeroLinkConfig {
    /// Build the configuration from environment variables.
    ///
    /// | Variable                   | Default                                   |
    /// |----------------------------|-------------------------------------------|
    /// | `AEROLINK_FLIGHTS_URL`     | `http://localhost:4100/v1/flights`        |
    /// | `AEROLINK_FLIGHTS_KEY`     | `YOUR_API_KEY` (sent as `access_key`)     |
    /// | `AEROLINK_NEWS_URL`        | `http://localhost:4100/v2/top-headlines`  |
    /// | `AEROLINK_NEWS_KEY`        | `YOUR_API_KEY` (sent as `apiKey`)         |
    /// | `AEROLINK_TIMEOUT_SECS`    | `10`                                      |
    /// | `AEROLINK_DISPLAY_CAP`     | `50`                                      |
    /// | `AEROLINK_FALLBACK_COUNT`  | `8`                                       |
    /// | `AEROLINK_FALLBACK_SEED`   | `73`                                      |
    /// | `AEROLINK_MATCH_THRESHOLD` | `0.3`                                     |
    ///
    /// Unparseable numeric values fall back to their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reading from `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let text = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let flights = RemoteSpec::new(
            FeedKind::Flights,
            text("AEROLINK_FLIGHTS_URL", "http://localhost:4100/v1/flights"),
        )
        .param("access_key", text("AEROLINK_FLIGHTS_KEY", PLACEHOLDER_KEY));

        let news = RemoteSpec::new(
            FeedKind::News,
            text("AEROLINK_NEWS_URL", "http://localhost:4100/v2/top-headlines"),
        )
        .param("category", "technology")
        .param("q", "aviation")
        .param("apiKey", text("AEROLINK_NEWS_KEY", PLACEHOLDER_KEY));

        let feed = FeedConfig {
            timeout: parsed(&lookup, "AEROLINK_TIMEOUT_SECS")
                .map_or(DEFAULT_TIMEOUT, Duration::from_secs),
            display_cap: parsed(&lookup, "AEROLINK_DISPLAY_CAP").unwrap_or(DEFAULT_DISPLAY_CAP),
        };

        Self {
            flights,
            news,
            feed,
            fallback_count: parsed(&lookup, "AEROLINK_FALLBACK_COUNT").unwrap_or(8),
            fallback_seed: parsed(&lookup, "AEROLINK_FALLBACK_SEED").unwrap_or(73),
            match_threshold: parsed(&lookup, "AEROLINK_MATCH_THRESHOLD")
                .unwrap_or(DEFAULT_THRESHOLD),
        }
    }

    /// The endpoint for `kind`.
    pub fn source(&self, kind: FeedKind) -> &RemoteSpec {
        match kind {
            FeedKind::Flights => &self.flights,
            FeedKind::News => &self.news,
        }
    }
}

fn parsed<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|v| v.trim().parse().ok())
}
