mod render;

use std::sync::Arc;

use aerolink_models::{AnswerMode, FeedKind, FeedSnapshot};
use aerolink_sdk::{
    AeroLinkConfig, ContentFeed, FeedSlot, JsonFilePreferenceStore, KeywordResponder,
    PreferenceStore, ShellCommand, ShellState,
};
use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "aerolink-cli")]
#[command(about = "AeroLink feeds and assistant from the terminal")]
#[command(author, version, long_about = None)]
struct Cli {
    /// Minimum assistant match score (overrides AEROLINK_MATCH_THRESHOLD)
    #[arg(long, global = true)]
    threshold: Option<f64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load one feed and print the snapshot
    Feed {
        /// flights or news
        kind: FeedKind,
        /// Seed for simulated content if the feed is unavailable
        #[arg(long)]
        seed: Option<u64>,
        /// Number of simulated items if the feed is unavailable
        #[arg(long)]
        count: Option<usize>,
        /// Print the snapshot as JSON
        #[arg(long, action)]
        json: bool,
    },

    /// Ask the assistant a single question
    Ask {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
        #[arg(long, action)]
        expert: bool,
    },

    /// Interactive shell over both feeds and the assistant
    Chat {
        #[arg(long, action)]
        expert: bool,
    },

    /// Show or toggle the persisted display mode
    Theme {
        #[arg(value_enum, default_value_t = ThemeAction::Show)]
        action: ThemeAction,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ThemeAction {
    Show,
    Toggle,
}

fn answer_mode(expert: bool) -> AnswerMode {
    if expert {
        AnswerMode::Expert
    } else {
        AnswerMode::Standard
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = AeroLinkConfig::from_env();
    if let Some(threshold) = cli.threshold {
        config.match_threshold = threshold;
    }
    debug!(feed = ?config.feed, threshold = config.match_threshold, "configuration loaded");

    let responder = KeywordResponder::aviation().with_threshold(config.match_threshold);

    match cli.command {
        Commands::Feed { kind, seed, count, json } => {
            let feed = ContentFeed::new(config.feed)?;
            let snapshot = feed
                .load(
                    config.source(kind),
                    seed.unwrap_or(config.fallback_seed),
                    count.unwrap_or(config.fallback_count),
                )
                .await;
            if json {
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
            } else {
                println!("{}", render::snapshot(&snapshot));
            }
        }
        Commands::Ask { query, expert } => {
            let reply = responder.evaluate(&query.join(" "), answer_mode(expert));
            debug!(outcome = ?reply.outcome, "assistant answered");
            println!("{}", reply.text);
        }
        Commands::Chat { expert } => {
            let store = JsonFilePreferenceStore::in_config_dir()?;
            chat(&config, &responder, &store, answer_mode(expert)).await?;
        }
        Commands::Theme { action } => {
            let store = JsonFilePreferenceStore::in_config_dir()?;
            let mut shell = ShellState::restore(&store);
            if let ThemeAction::Toggle = action {
                shell
                    .toggle_display_mode(&store)
                    .with_context(|| format!("saving {}", store.path().display()))?;
            }
            println!("{}", shell.display_mode);
        }
    }

    Ok(())
}

async fn refresh_both(
    feed: &ContentFeed,
    config: &AeroLinkConfig,
    flights: &FeedSlot,
    news: &FeedSlot,
) {
    let (f, n) = futures::join!(
        flights.refresh(feed, &config.flights, config.fallback_seed, config.fallback_count),
        news.refresh(feed, &config.news, config.fallback_seed, config.fallback_count),
    );
    for (kind, published) in [(FeedKind::Flights, f), (FeedKind::News, n)] {
        match published {
            Some(snapshot) => println!(
                "{kind}: {} items ({})",
                snapshot.len(),
                snapshot.provenance()
            ),
            None => debug!(%kind, "load superseded, result dropped"),
        }
    }
}

fn show(slot: &FeedSlot) {
    let current: Option<Arc<FeedSnapshot>> = slot.current();
    match current {
        Some(snapshot) => println!("{}", render::snapshot(&snapshot)),
        None => println!("(not loaded yet)"),
    }
}

async fn chat(
    config: &AeroLinkConfig,
    responder: &KeywordResponder,
    store: &dyn PreferenceStore,
    mode: AnswerMode,
) -> anyhow::Result<()> {
    let feed = ContentFeed::new(config.feed)?;
    let flights = FeedSlot::new();
    let news = FeedSlot::new();
    let mut shell = ShellState::restore(store);

    println!("{}", render::status(&shell));
    refresh_both(&feed, config, &flights, &news).await;
    println!("type /help for commands");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match ShellCommand::parse(&line) {
            ShellCommand::ShowFlights => show(&flights),
            ShellCommand::ShowNews => show(&news),
            ShellCommand::Refresh => refresh_both(&feed, config, &flights, &news).await,
            ShellCommand::ToggleTheme => {
                if let Err(e) = shell.toggle_display_mode(store) {
                    warn!(error = %e, "display mode not saved");
                }
                println!("{}", render::status(&shell));
            }
            ShellCommand::TogglePanel => {
                shell.toggle_panel();
                println!("{}", render::status(&shell));
            }
            ShellCommand::Help => println!("{}", render::HELP),
            ShellCommand::Quit => break,
            ShellCommand::Ask(text) => {
                let reply = shell.submit(responder, &text, mode);
                if let Some(out) = render::assistant(&shell, &reply.text) {
                    println!("{out}");
                }
            }
        }
    }

    flights.close();
    news.close();
    Ok(())
}
