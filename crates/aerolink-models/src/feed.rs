//! Feed items and snapshots.
//!
//! A [`FeedSnapshot`] is the unit handed to the rendering side: an ordered,
//! immutable batch of [`FeedItem`]s tagged with its [`Provenance`]. A new
//! load replaces the whole snapshot; nothing mutates one in place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::article::NewsArticle;
use crate::flight::FlightRecord;

// ---------------------------------------------------------------------------
// FeedKind
// ---------------------------------------------------------------------------

/// Which content a feed carries.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FeedKind {
    /// Live flight positions for the tracker map.
    Flights,
    /// Aviation news cards.
    News,
}

impl FeedKind {
    /// Name of the top-level JSON array carrying the items in a remote
    /// response body.
    ///
    /// ```
    /// use aerolink_models::FeedKind;
    ///
    /// assert_eq!(FeedKind::Flights.payload_field(), "data");
    /// assert_eq!(FeedKind::News.payload_field(), "articles");
    /// ```
    pub fn payload_field(self) -> &'static str {
        match self {
            FeedKind::Flights => "data",
            FeedKind::News => "articles",
        }
    }
}

// ---------------------------------------------------------------------------
// Provenance
// ---------------------------------------------------------------------------

/// Whether a snapshot came from the network or from local simulation.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Provenance {
    /// Fetched from the remote endpoint.
    Live,
    /// Generated locally after the remote fetch failed.
    Simulated,
}

// ---------------------------------------------------------------------------
// FeedItem
// ---------------------------------------------------------------------------

/// One content record.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum FeedItem {
    Flight(FlightRecord),
    Article(NewsArticle),
}

impl FeedItem {
    /// Stable identifier: the callsign for flights, the title for articles.
    pub fn identifier(&self) -> &str {
        match self {
            FeedItem::Flight(f) => f.callsign().as_str(),
            FeedItem::Article(a) => a.title(),
        }
    }

    /// Time the record was reported or published.
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            FeedItem::Flight(f) => f.updated_at(),
            FeedItem::Article(a) => a.published_at(),
        }
    }

    /// The feed this record belongs to.
    pub fn kind(&self) -> FeedKind {
        match self {
            FeedItem::Flight(_) => FeedKind::Flights,
            FeedItem::Article(_) => FeedKind::News,
        }
    }
}

impl From<FlightRecord> for FeedItem {
    fn from(f: FlightRecord) -> Self {
        FeedItem::Flight(f)
    }
}

impl From<NewsArticle> for FeedItem {
    fn from(a: NewsArticle) -> Self {
        FeedItem::Article(a)
    }
}

// ---------------------------------------------------------------------------
// FeedSnapshot
// ---------------------------------------------------------------------------

/// An immutable, timestamped batch of feed items.
///
/// There are no mutating accessors; share one behind an `Arc` and swap the
/// whole value when a newer load completes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FeedSnapshot {
    kind: FeedKind,
    provenance: Provenance,
    generated_at: DateTime<Utc>,
    items: Vec<FeedItem>,
}

impl FeedSnapshot {
    /// Freeze `items` into a snapshot.
    pub fn new(
        kind: FeedKind,
        provenance: Provenance,
        generated_at: DateTime<Utc>,
        items: Vec<FeedItem>,
    ) -> Self {
        Self {
            kind,
            provenance,
            generated_at,
            items,
        }
    }

    pub fn kind(&self) -> FeedKind {
        self.kind
    }

    pub fn provenance(&self) -> Provenance {
        self.provenance
    }

    /// `true` when the snapshot was produced by the fallback generator.
    pub fn is_simulated(&self) -> bool {
        self.provenance == Provenance::Simulated
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    /// Items in display order.
    pub fn items(&self) -> &[FeedItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
