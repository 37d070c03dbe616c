//! Assistant knowledge-base entries.

use serde::{Deserialize, Serialize};

/// Which register the assistant answers in.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AnswerMode {
    /// Plain-language answers for site visitors.
    #[default]
    Standard,
    /// Technical answers, when the entry provides one.
    Expert,
}

/// One topic phrase and its canned answer.
///
/// The phrase is lower-cased on construction so matching never depends on
/// how the table was typed.
///
/// # Examples
///
/// ```
/// use aerolink_models::{AnswerMode, TopicEntry};
///
/// let entry = TopicEntry::new("Quantum Navigation", "Q-resp")
///     .with_expert_response("Q-resp (expert)");
/// assert_eq!(entry.phrase(), "quantum navigation");
/// assert_eq!(entry.response(AnswerMode::Standard), "Q-resp");
/// assert_eq!(entry.response(AnswerMode::Expert), "Q-resp (expert)");
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TopicEntry {
    phrase: String,
    response: String,
    expert_response: Option<String>,
}

impl TopicEntry {
    pub fn new(phrase: &str, response: impl Into<String>) -> Self {
        Self {
            phrase: phrase.trim().to_lowercase(),
            response: response.into(),
            expert_response: None,
        }
    }

    /// Attach the answer used in [`AnswerMode::Expert`].
    #[must_use]
    pub fn with_expert_response(mut self, response: impl Into<String>) -> Self {
        self.expert_response = Some(response.into());
        self
    }

    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// Words of the phrase, split on whitespace.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.phrase.split_whitespace()
    }

    /// The answer for `mode`, falling back to the standard answer when no
    /// expert variant exists.
    pub fn response(&self, mode: AnswerMode) -> &str {
        match (mode, &self.expert_response) {
            (AnswerMode::Expert, Some(expert)) => expert,
            _ => &self.response,
        }
    }
}
