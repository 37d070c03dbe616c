//! # AeroLink Models
//!
//! Core data types shared by the AeroLink content feeds, the assistant, and
//! the mock content server.
//!
//! ## Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`flight`] | `FlightRecord`, `Callsign`, `Position`, `FlightStatus` |
//! | [`article`] | `NewsArticle` |
//! | [`feed`] | `FeedItem`, `FeedSnapshot`, `FeedKind`, `Provenance` |
//! | [`topic`] | Assistant knowledge-base entries and answer modes |
//! | [`conversation`] | Chat turns and the append-only transcript |
//! | [`preference`] | Persisted display mode and panel state |
//! | [`wire`] | Remote JSON payload formats |

pub mod article;
pub mod conversation;
pub mod error;
pub mod feed;
pub mod flight;
pub mod preference;
pub mod topic;
pub mod wire;

// Re-export all public types at crate root for convenience.
pub use article::*;
pub use conversation::*;
pub use error::*;
pub use feed::*;
pub use flight::*;
pub use preference::*;
pub use topic::*;
pub use wire::*;
