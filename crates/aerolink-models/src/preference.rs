//! Display preferences.

use serde::{Deserialize, Serialize};

/// Colour scheme of the site. The only value persisted across sessions.
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
pub enum DisplayMode {
    #[default]
    Dark,
    Light,
}

impl DisplayMode {
    /// The other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Dark => DisplayMode::Light,
            DisplayMode::Light => DisplayMode::Dark,
        }
    }
}

/// Whether the assistant chat panel is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum PanelState {
    #[default]
    Expanded,
    Minimized,
}

impl PanelState {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            PanelState::Expanded => PanelState::Minimized,
            PanelState::Minimized => PanelState::Expanded,
        }
    }
}
