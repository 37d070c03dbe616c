//! News feed articles.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{check_range, ModelError};

/// A single aviation news card.
///
/// The title doubles as the stable identifier and must not be blank.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NewsArticle {
    title: String,
    description: Option<String>,
    source: Option<String>,
    url: Option<String>,
    credibility: Option<f64>,
    published_at: DateTime<Utc>,
}

impl NewsArticle {
    /// Build an article. The title is trimmed and must be non-empty.
    pub fn new(title: &str, published_at: DateTime<Utc>) -> Result<Self, ModelError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ModelError::EmptyIdentifier { field: "title" });
        }
        Ok(Self {
            title: title.to_string(),
            description: None,
            source: None,
            url: None,
            credibility: None,
            published_at,
        })
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Attach a credibility score, which must lie in `[0, 100]`.
    pub fn with_credibility(mut self, score: f64) -> Result<Self, ModelError> {
        self.credibility = Some(check_range("credibility", score, 0.0, 100.0)?);
        Ok(self)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Publisher name, when known.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Credibility score in `[0, 100]`, when known.
    pub fn credibility(&self) -> Option<f64> {
        self.credibility
    }

    pub fn published_at(&self) -> DateTime<Utc> {
        self.published_at
    }
}

impl fmt::Display for NewsArticle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)?;
        if let Some(source) = &self.source {
            write!(f, " ({source})")?;
        }
        if let Some(score) = self.credibility {
            write!(f, " [{score:.0}%]")?;
        }
        Ok(())
    }
}
