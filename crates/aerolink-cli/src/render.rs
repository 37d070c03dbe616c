//! Plain-text rendering of snapshots and replies.

use aerolink_models::{FeedItem, FeedSnapshot, PanelState};
use aerolink_sdk::ShellState;

/// Header line plus one line per item.
pub fn snapshot(snapshot: &FeedSnapshot) -> String {
    let mut out = format!(
        "== {} [{}] {} items at {} ==",
        snapshot.kind(),
        snapshot.provenance(),
        snapshot.len(),
        snapshot.generated_at().format("%H:%M:%S"),
    );
    if snapshot.is_empty() {
        out.push_str("\n  (nothing to show)");
    }
    for item in snapshot.items() {
        out.push_str("\n  ");
        out.push_str(&item_line(item));
    }
    out
}

fn item_line(item: &FeedItem) -> String {
    match item {
        FeedItem::Flight(flight) => flight.to_string(),
        FeedItem::Article(article) => article.to_string(),
    }
}

pub fn status(shell: &ShellState) -> String {
    format!(
        "theme: {} | assistant: {} | {} turns",
        shell.display_mode,
        shell.assistant_panel,
        shell.transcript.len()
    )
}

pub fn assistant(shell: &ShellState, text: &str) -> Option<String> {
    match shell.assistant_panel {
        PanelState::Expanded => Some(format!("assistant> {text}")),
        PanelState::Minimized => None,
    }
}

pub const HELP: &str = "\
commands:
  /flights    show the flight snapshot
  /news       show the news snapshot
  /refresh    reload both feeds
  /theme      toggle light/dark mode
  /panel      show or hide assistant replies
  /quit       leave
anything else is sent to the assistant";
