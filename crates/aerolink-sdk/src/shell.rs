//! Explicit UI shell state.
//!
//! Theme, panel visibility and the chat transcript live in one
//! [`ShellState`] value that the front end owns and passes around. The
//! preference store is injected wherever persistence happens.

use aerolink_models::{
    AnswerMode, ConversationTurn, DisplayMode, PanelState, Sender, Transcript,
};
use tracing::warn;

use crate::error::SdkError;
use crate::preferences::PreferenceStore;
use crate::responder::{KeywordResponder, Reply};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShellState {
    pub display_mode: DisplayMode,
    pub assistant_panel: PanelState,
    pub transcript: Transcript,
}

impl ShellState {
    /// Start a session with the persisted display mode.
    ///
    /// An unreadable store is logged and the default mode is used.
    pub fn restore(store: &dyn PreferenceStore) -> Self {
        let display_mode = match store.load_display_mode() {
            Ok(mode) => mode.unwrap_or_default(),
            Err(e) => {
                warn!(error = %e, "could not read preferences, using default display mode");
                DisplayMode::default()
            }
        };
        Self {
            display_mode,
            ..Self::default()
        }
    }

    /// Flip the display mode and persist it.
    ///
    /// The in-memory mode changes even when saving fails, so the UI stays
    /// responsive; the error is returned for the caller to report.
    pub fn toggle_display_mode(
        &mut self,
        store: &dyn PreferenceStore,
    ) -> Result<DisplayMode, SdkError> {
        self.display_mode = self.display_mode.toggled();
        store.save_display_mode(self.display_mode)?;
        Ok(self.display_mode)
    }

    pub fn toggle_panel(&mut self) -> PanelState {
        self.assistant_panel = self.assistant_panel.toggled();
        self.assistant_panel
    }

    /// Ask the assistant and record both sides of the exchange.
    ///
    /// Blank input still gets the default answer, but no empty user turn is
    /// recorded.
    pub fn submit(&mut self, responder: &KeywordResponder, input: &str, mode: AnswerMode) -> Reply {
        let reply = responder.evaluate(input, mode);
        let trimmed = input.trim();
        if !trimmed.is_empty() {
            self.transcript
                .push(ConversationTurn::now(Sender::User, trimmed));
        }
        self.transcript
            .push(ConversationTurn::now(Sender::Assistant, reply.text.clone()));
        reply
    }
}
