//! CLI command handlers.
//!
//! Each handler loads what it needs, runs the library code and prints to
//! stdout. Logs go to stderr so output can be piped.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use std::collections::HashSet;
use std::io::Read as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail, ensure};
use arcana_oracle::OracleClient;
use arcana_ui::{Deck, FanConfig, PlacedCard, Selection, Wizard, fan};
use tracing::{debug, info};

use crate::cli::Commands;
use crate::config::ArcanaConfig;
use crate::render::render_reading;

/// Execute a CLI command.
///
/// This is the main command dispatcher that routes to the appropriate handler.
///
/// # Errors
///
/// Returns any error raised by the selected command.
pub async fn execute_command(command: Commands, config_path: Option<PathBuf>) -> Result<()> {
    let config = ArcanaConfig::load(config_path.as_deref()).with_context(|| {
        format!(
            "Failed to load config{}",
            config_path
                .as_deref()
                .map(|p| format!(" from {}", p.display()))
                .unwrap_or_default()
        )
    })?;

    match command {
        Commands::Read {
            question,
            cards,
            plain,
        } => cmd_read(&config, &question, cards, plain).await,

        Commands::Layout {
            count,
            hover,
            selected,
            json,
        } => cmd_layout(&config.fan, count, hover, &selected, json),

        Commands::Parse { file } => cmd_parse(file.as_deref()),

        Commands::Draw { count, deck_size } => cmd_draw(count, deck_size),
    }
}

/// Walk the wizard: intention, card selection, consultation.
async fn cmd_read(
    config: &ArcanaConfig,
    question: &str,
    cards: Option<Vec<usize>>,
    plain: bool,
) -> Result<()> {
    let deck = Deck::full();
    let limit = config.selection_limit;
    let mut wizard = Wizard::new(Selection::new(deck, limit).context("Invalid selection limit")?);

    wizard
        .submit_intention(question)
        .context("A reading needs a question")?;

    let cards = match cards {
        Some(cards) => {
            ensure!(
                cards.len() == limit,
                "Expected {limit} cards, got {}",
                cards.len()
            );
            cards
        }
        None => deck.draw_distinct(&mut rand::thread_rng(), limit, &HashSet::new())?,
    };
    debug!(?cards, "Cards chosen");

    for index in cards {
        wizard
            .select(index)
            .with_context(|| format!("Cannot select card {index}"))?;
    }

    let Some((question, indices)) = wizard.consultation() else {
        bail!("Selection incomplete: {} of {limit} cards", wizard.selection().indices().len());
    };

    let client = OracleClient::with_config(config.oracle.clone())
        .context("Failed to create oracle client")?;
    info!(base_url = %client.config().base_url, "Consulting the oracle");

    let reading = client.consult(question, indices).await;
    print!("{}", render_reading(&reading, plain));
    Ok(())
}

fn cmd_layout(
    config: &FanConfig,
    count: usize,
    hover: Option<usize>,
    selected: &[usize],
    json: bool,
) -> Result<()> {
    let placed = fan_of(config, count, hover, selected)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&placed)?);
    } else {
        println!("{:>5} {:>10} {:>10} {:>9} {:>6}", "card", "x", "y", "rotation", "stack");
        for card in &placed {
            let style = card.style;
            println!(
                "{:>5} {:>10.2} {:>10.2} {:>9.2} {:>6}",
                card.index, style.offset_x, style.offset_y, style.rotation_degrees, style.stack_order
            );
        }
    }
    Ok(())
}

/// Fan of a `count`-card deck with `selected` removed.
fn fan_of(
    config: &FanConfig,
    count: usize,
    hover: Option<usize>,
    selected: &[usize],
) -> Result<Vec<PlacedCard>> {
    let deck = Deck::new(count)?;
    let mut selection = Selection::new(deck, count)?;
    for &index in selected {
        selection
            .select(index)
            .with_context(|| format!("Cannot select card {index}"))?;
    }
    Ok(fan(&selection, hover, config)?)
}

fn cmd_parse(file: Option<&Path>) -> Result<()> {
    let text = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            text
        }
    };

    let parsed = arcana_reading::parse(&text);
    println!("{}", serde_json::to_string_pretty(&parsed)?);
    Ok(())
}

fn cmd_draw(count: usize, deck_size: usize) -> Result<()> {
    let deck = Deck::new(deck_size)?;
    let drawn = deck.draw_distinct(&mut rand::thread_rng(), count, &HashSet::new())?;
    let line = drawn
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",");
    println!("{line}");
    Ok(())
}
