//! Typed and spoken input commands.
//!
//! Input arrives either from the keyboard or as a finished speech
//! transcript. Both go through [`ShellCommand::parse`]: slash commands and
//! a few fixed spoken phrases drive the shell, everything else is a
//! question for the assistant.

use std::fmt;

/// What the user asked the shell to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    ShowFlights,
    ShowNews,
    /// Reload both feeds.
    Refresh,
    ToggleTheme,
    TogglePanel,
    Help,
    Quit,
    /// Free text for the assistant.
    Ask(String),
}

const SPOKEN: &[(&str, ShellCommand)] = &[
    ("show flights", ShellCommand::ShowFlights),
    ("track flights", ShellCommand::ShowFlights),
    ("flight tracker", ShellCommand::ShowFlights),
    ("show news", ShellCommand::ShowNews),
    ("latest news", ShellCommand::ShowNews),
    ("refresh", ShellCommand::Refresh),
    ("toggle theme", ShellCommand::ToggleTheme),
    ("switch theme", ShellCommand::ToggleTheme),
    ("toggle chat", ShellCommand::TogglePanel),
    ("help", ShellCommand::Help),
    ("exit", ShellCommand::Quit),
];

impl ShellCommand {
    /// Interpret one line of input.
    ///
    /// ```
    /// use aerolink_sdk::ShellCommand;
    ///
    /// assert_eq!(ShellCommand::parse("/news"), ShellCommand::ShowNews);
    /// assert_eq!(ShellCommand::parse("Show flights."), ShellCommand::ShowFlights);
    /// assert_eq!(
    ///     ShellCommand::parse("what is autopilot"),
    ///     ShellCommand::Ask("what is autopilot".into())
    /// );
    /// ```
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if let Some(name) = trimmed.strip_prefix('/') {
            return match name.to_lowercase().as_str() {
                "flights" => ShellCommand::ShowFlights,
                "news" => ShellCommand::ShowNews,
                "refresh" => ShellCommand::Refresh,
                "theme" => ShellCommand::ToggleTheme,
                "panel" => ShellCommand::TogglePanel,
                "quit" | "exit" => ShellCommand::Quit,
                _ => ShellCommand::Help,
            };
        }

        // Speech engines add capitals and closing punctuation.
        let spoken = trimmed
            .trim_end_matches(['.', '!', '?'])
            .to_lowercase();
        SPOKEN
            .iter()
            .find(|(phrase, _)| *phrase == spoken)
            .map_or_else(|| ShellCommand::Ask(trimmed.to_string()), |(_, cmd)| cmd.clone())
    }
}

impl fmt::Display for ShellCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellCommand::ShowFlights => f.write_str("/flights"),
            ShellCommand::ShowNews => f.write_str("/news"),
            ShellCommand::Refresh => f.write_str("/refresh"),
            ShellCommand::ToggleTheme => f.write_str("/theme"),
            ShellCommand::TogglePanel => f.write_str("/panel"),
            ShellCommand::Help => f.write_str("/help"),
            ShellCommand::Quit => f.write_str("/quit"),
            ShellCommand::Ask(text) => f.write_str(text),
        }
    }
}
