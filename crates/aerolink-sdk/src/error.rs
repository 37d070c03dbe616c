//! SDK error types.
//!
//! [`SdkError`] is returned by the few fallible setup operations of the SDK
//! (building the HTTP client, reading configuration, persisting
//! preferences). Feed loading never returns it: fetch problems are
//! described by [`FeedFailure`] and absorbed by the simulated fallback.

/// Error type for SDK setup and persistence operations.
#[derive(Debug, thiserror::Error)]
pub enum SdkError {
    /// Invalid or missing configuration (e.g. bad URL, unusable directory).
    #[error("configuration error: {0}")]
    Config(String),

    /// The HTTP client could not be constructed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization / deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Why a remote feed could not be used.
///
/// Only observable through [`ContentFeed::try_fetch`](crate::ContentFeed::try_fetch);
/// [`ContentFeed::load`](crate::ContentFeed::load) turns every variant into
/// a simulated snapshot.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeedFailure {
    /// Transport error, timeout, or an unusable endpoint URL.
    #[error("network failure: {0}")]
    Network(String),

    /// The endpoint answered with a non-2xx status.
    #[error("endpoint returned HTTP {0}")]
    Status(u16),

    /// The body was not JSON or lacked the expected item array.
    #[error("malformed payload: {0}")]
    MalformedPayload(String),
}

impl From<reqwest::Error> for FeedFailure {
    fn from(e: reqwest::Error) -> Self {
        FeedFailure::Network(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_failure_display() {
        assert_eq!(
            FeedFailure::Status(503).to_string(),
            "endpoint returned HTTP 503"
        );
        assert_eq!(
            FeedFailure::MalformedPayload("missing `data` array".into()).to_string(),
            "malformed payload: missing `data` array"
        );
    }

    #[test]
    fn sdk_error_from_io() {
        let err: SdkError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.to_string(), "I/O error: gone");
    }
}
