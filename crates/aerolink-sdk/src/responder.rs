//! Keyword-matched assistant replies.
//!
//! The assistant answers from a fixed, ordered table of [`TopicEntry`]s.
//! Each topic is scored against the query by word-pair containment and the
//! best topic wins if its score beats the threshold. The responder holds no
//! per-conversation state, so one instance can serve any number of callers.

use aerolink_models::{AnswerMode, TopicEntry};

/// Minimum score (exclusive) a topic needs to be used.
pub const DEFAULT_THRESHOLD: f64 = 0.3;

/// Reply used for empty queries and when no topic clears the threshold.
pub const DEFAULT_RESPONSE: &str =
    "I can answer questions about autopilot, GM73, or aviation future.";

/// How a reply was chosen.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome {
    /// The query was blank; nothing was scored.
    EmptyQuery,
    /// No topic scored above the threshold.
    NoConfidentMatch {
        /// Highest score seen, `0.0` when the table is empty.
        best_score: f64,
    },
    /// A topic was selected.
    Matched {
        /// Position of the topic in the table.
        index: usize,
        /// Its score.
        score: f64,
    },
}

/// An answer plus the reason it was chosen.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub text: String,
    pub outcome: MatchOutcome,
}

impl Reply {
    /// `true` when the text came from a topic rather than the default.
    pub fn is_match(&self) -> bool {
        matches!(self.outcome, MatchOutcome::Matched { .. })
    }
}

/// Word-pair containment score.
///
/// Counts the pairs `(q, t)` where `q` contains `t` or `t` contains `q`,
/// divided by the longer of the two word lists. Zero when both are empty.
///
/// ```
/// use aerolink_sdk::match_score;
///
/// let q = ["tell", "me", "about", "quantum", "nav"];
/// let t = ["quantum", "navigation"];
/// assert_eq!(match_score(&q, &t), 0.4);
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn match_score(query_words: &[&str], topic_words: &[&str]) -> f64 {
    let longest = query_words.len().max(topic_words.len());
    if longest == 0 {
        return 0.0;
    }
    let hits = query_words
        .iter()
        .flat_map(|q| topic_words.iter().map(move |t| (*q, *t)))
        .filter(|&(q, t)| q.contains(t) || t.contains(q))
        .count();
    hits as f64 / longest as f64
}

/// Score every topic and return the first one with the highest score.
fn best_topic(query_words: &[&str], topics: &[TopicEntry]) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (index, topic) in topics.iter().enumerate() {
        let topic_words: Vec<&str> = topic.words().collect();
        let score = match_score(query_words, &topic_words);
        // Strictly greater: ties keep the earlier topic.
        if best.is_none_or(|(_, s)| score > s) {
            best = Some((index, score));
        }
    }
    best
}

fn select(
    query: &str,
    topics: &[TopicEntry],
    threshold: f64,
    default_response: &str,
    mode: AnswerMode,
) -> Reply {
    let lowered = query.to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();
    if words.is_empty() {
        return Reply {
            text: default_response.to_string(),
            outcome: MatchOutcome::EmptyQuery,
        };
    }

    match best_topic(&words, topics) {
        Some((index, score)) if score > threshold => Reply {
            text: topics[index].response(mode).to_string(),
            outcome: MatchOutcome::Matched { index, score },
        },
        best => Reply {
            text: default_response.to_string(),
            outcome: MatchOutcome::NoConfidentMatch {
                best_score: best.map_or(0.0, |(_, s)| s),
            },
        },
    }
}

/// Answer `query` from `topics`, using [`DEFAULT_RESPONSE`] as fallback.
///
/// ```
/// use aerolink_models::TopicEntry;
/// use aerolink_sdk::{respond, DEFAULT_RESPONSE};
///
/// let topics = [TopicEntry::new("quantum navigation", "Q-resp")];
/// assert_eq!(respond("tell me about quantum nav", &topics, 0.3), "Q-resp");
/// assert_eq!(respond("banana", &topics, 0.3), DEFAULT_RESPONSE);
/// ```
pub fn respond(query: &str, topics: &[TopicEntry], threshold: f64) -> String {
    select(query, topics, threshold, DEFAULT_RESPONSE, AnswerMode::Standard).text
}

// ---------------------------------------------------------------------------
// KeywordResponder
// ---------------------------------------------------------------------------

/// A topic table with its threshold and fallback text.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordResponder {
    topics: Vec<TopicEntry>,
    threshold: f64,
    default_response: String,
}

impl KeywordResponder {
    /// Topics are consulted in the given order; earlier entries win ties.
    pub fn new(topics: Vec<TopicEntry>, threshold: f64, default_response: impl Into<String>) -> Self {
        Self {
            topics,
            threshold,
            default_response: default_response.into(),
        }
    }

    /// The knowledge base shipped with the site.
    ///
    /// Its keys are single words, and the score is divided by the longer
    /// word list, so at the default threshold only queries of three words
    /// or fewer can match. Lower the threshold with
    /// [`with_threshold`](Self::with_threshold) to answer longer questions.
    pub fn aviation() -> Self {
        Self::new(aviation_topics(), DEFAULT_THRESHOLD, DEFAULT_RESPONSE)
    }

    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn topics(&self) -> &[TopicEntry] {
        &self.topics
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn default_response(&self) -> &str {
        &self.default_response
    }

    /// Answer text only.
    pub fn respond(&self, query: &str) -> String {
        self.evaluate(query, AnswerMode::Standard).text
    }

    /// Answer with the match outcome, in the requested mode.
    pub fn evaluate(&self, query: &str, mode: AnswerMode) -> Reply {
        select(
            query,
            &self.topics,
            self.threshold,
            &self.default_response,
            mode,
        )
    }
}

impl Default for KeywordResponder {
    fn default() -> Self {
        Self::aviation()
    }
}

fn aviation_topics() -> Vec<TopicEntry> {
    vec![
        TopicEntry::new(
            "autopilot",
            "Modern autopilot systems use AI to handle routine flight operations \
             while pilots monitor the systems.",
        )
        .with_expert_response(
            "Autopilots couple the flight director to the control surfaces: LNAV and \
             VNAV track the FMS lateral and vertical profile while autothrottle holds \
             the target speed; pilots monitor mode annunciations and intervene on \
             disconnect.",
        ),
        TopicEntry::new(
            "GM73",
            "George Nuyekpe (GM73) is an Aviation Engineer and AI Developer known as \
             'The Flying Engineer'",
        ),
        TopicEntry::new(
            "future",
            "By 2025, AI will assist in 40% of routine flight operations according to \
             industry estimates.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topics(pairs: &[(&str, &str)]) -> Vec<TopicEntry> {
        pairs.iter().map(|(p, r)| TopicEntry::new(p, *r)).collect()
    }

    #[test]
    fn empty_query_returns_default_without_scoring() {
        let responder = KeywordResponder::new(topics(&[("a", "A")]), -1.0, "fallback");
        for query in ["", "   ", "\t\n"] {
            let reply = responder.evaluate(query, AnswerMode::Standard);
            assert_eq!(reply.text, "fallback");
            assert_eq!(reply.outcome, MatchOutcome::EmptyQuery);
        }
        assert_eq!(respond("", &[], 0.0), DEFAULT_RESPONSE);
    }

    #[test]
    fn quantum_navigation_example() {
        let t = topics(&[("quantum navigation", "Q-resp")]);
        assert_eq!(respond("tell me about quantum nav", &t, 0.3), "Q-resp");
        assert_eq!(respond("banana", &t, 0.3), DEFAULT_RESPONSE);
    }

    #[test]
    fn banana_scores_zero() {
        let responder = KeywordResponder::new(
            topics(&[("quantum navigation", "Q-resp")]),
            0.3,
            "default",
        );
        assert_eq!(
            responder.evaluate("banana", AnswerMode::Standard).outcome,
            MatchOutcome::NoConfidentMatch { best_score: 0.0 }
        );
    }

    #[test]
    fn higher_score_wins_in_either_order() {
        let forward = topics(&[("autopilot", "A"), ("auto", "B")]);
        let reverse = topics(&[("auto", "B"), ("autopilot", "A")]);
        // "autopilot" scores 2/2, "auto" scores 1/2.
        assert_eq!(respond("auto pilot", &forward, 0.3), "A");
        assert_eq!(respond("auto pilot", &reverse, 0.3), "A");
    }

    #[test]
    fn equal_scores_resolve_to_first_topic() {
        // Both score 1/2 against "auto pilot".
        let forward = topics(&[("pilot", "P"), ("auto", "B")]);
        let reverse = topics(&[("auto", "B"), ("pilot", "P")]);
        assert_eq!(respond("auto pilot", &forward, 0.3), "P");
        assert_eq!(respond("auto pilot", &reverse, 0.3), "B");
    }

    #[test]
    fn threshold_is_exclusive() {
        // "quantum navigation" vs "tell me about quantum nav" scores exactly 0.4.
        let t = topics(&[("quantum navigation", "Q-resp")]);
        assert_eq!(respond("tell me about quantum nav", &t, 0.4), DEFAULT_RESPONSE);
        assert_eq!(respond("tell me about quantum nav", &t, 0.39), "Q-resp");
    }

    #[test]
    fn containment_checked_both_ways() {
        assert_eq!(match_score(&["nav"], &["navigation"]), 1.0);
        assert_eq!(match_score(&["navigation"], &["nav"]), 1.0);
        assert_eq!(match_score(&[], &[]), 0.0);
        assert_eq!(match_score(&["x"], &[]), 0.0);
    }

    #[test]
    fn query_is_case_insensitive() {
        let responder = KeywordResponder::aviation();
        let reply = responder.evaluate("GM73?", AnswerMode::Standard);
        assert!(reply.is_match());
        assert!(reply.text.contains("The Flying Engineer"));
    }

    #[test]
    fn built_in_table_answers_autopilot() {
        let responder = KeywordResponder::aviation();
        assert!(responder
            .respond("what is autopilot?")
            .starts_with("Modern autopilot systems"));
        let expert = responder.evaluate("autopilot", AnswerMode::Expert);
        assert!(expert.text.contains("LNAV"));
    }

    #[test]
    fn built_in_table_defaults_for_unknown_topic() {
        let responder = KeywordResponder::aviation();
        assert_eq!(responder.respond("bananas are yellow"), DEFAULT_RESPONSE);
    }

    #[test]
    fn empty_table_never_matches() {
        let responder = KeywordResponder::new(Vec::new(), 0.0, "nothing");
        let reply = responder.evaluate("anything", AnswerMode::Standard);
        assert_eq!(reply.text, "nothing");
        assert_eq!(reply.outcome, MatchOutcome::NoConfidentMatch { best_score: 0.0 });
    }

    #[test]
    fn responder_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<KeywordResponder>();
    }

    #[test]
    fn long_questions_need_a_lower_threshold() {
        let responder = KeywordResponder::aviation();
        let reply = responder.evaluate("tell me about the future", AnswerMode::Standard);
        assert_eq!(reply.text, DEFAULT_RESPONSE);
        assert!(matches!(
            reply.outcome,
            MatchOutcome::NoConfidentMatch { best_score } if (best_score - 0.2).abs() < 1e-9
        ));

        assert!(responder.evaluate("about the future", AnswerMode::Standard).is_match());

        let relaxed = KeywordResponder::aviation().with_threshold(0.15);
        let reply = relaxed.evaluate("tell me about the future", AnswerMode::Standard);
        assert_eq!(reply.outcome, MatchOutcome::Matched { index: 2, score: 0.2 });
    }
}
