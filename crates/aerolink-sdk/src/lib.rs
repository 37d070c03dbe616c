//! # AeroLink SDK
//!
//! Content and assistant logic behind the AeroLink aviation site.
//!
//! The SDK provides:
//!
//! * [`ContentFeed`]: one-shot fetch of a remote flight or news endpoint
//!   with a deterministic simulated fallback.
//! * [`FeedSlot`]: holder for the snapshot on display that drops stale or
//!   abandoned loads.
//! * [`KeywordResponder`]: keyword-matched answers for the assistant chat.
//! * [`ShellState`] and [`ShellCommand`]: explicit UI state and input
//!   parsing for front ends.
//! * [`PreferenceStore`]: persistence of the display mode.
//! * [`AeroLinkConfig`]: environment-driven configuration.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use aerolink_sdk::{AeroLinkConfig, ContentFeed, FeedSlot, KeywordResponder};
//!
//! # async fn run() -> Result<(), aerolink_sdk::SdkError> {
//! let config = AeroLinkConfig::from_env();
//! let feed = ContentFeed::new(config.feed)?;
//! let flights = FeedSlot::new();
//!
//! if let Some(snapshot) = flights
//!     .refresh(&feed, &config.flights, config.fallback_seed, config.fallback_count)
//!     .await
//! {
//!     println!("{} flights ({})", snapshot.len(), snapshot.provenance());
//! }
//!
//! let assistant = KeywordResponder::aviation().with_threshold(config.match_threshold);
//! println!("{}", assistant.respond("what is autopilot?"));
//! # Ok(())
//! # }
//! ```

pub mod command;
pub mod config;
pub mod error;
pub mod feed;
pub mod preferences;
pub mod responder;
pub mod shell;
pub mod simulator;
pub mod slot;

pub use command::ShellCommand;
pub use config::AeroLinkConfig;
pub use error::{FeedFailure, SdkError};
pub use feed::{parse_payload, Clock, ContentFeed, FeedConfig, RemoteSpec};
pub use preferences::{JsonFilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
pub use responder::{
    match_score, respond, KeywordResponder, MatchOutcome, Reply, DEFAULT_RESPONSE,
    DEFAULT_THRESHOLD,
};
pub use shell::ShellState;
pub use simulator::simulate;
pub use slot::{FeedSlot, LoadTicket};
