//! CLI command definitions using clap.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Arcana - tarot readings from the command line
#[derive(Parser, Debug)]
#[command(name = "arcana")]
#[command(version)]
#[command(about = "Ask a question, draw cards from the fan, read the prediction")]
#[command(
    long_about = "Arcana draws tarot cards, asks a prediction service to interpret them, and renders the reading. It can also show the fan layout and parse prediction text on its own."
)]
pub struct Cli {
    /// Config file (.toml or .json)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ask a question and get a reading
    Read {
        /// The question for the oracle
        #[arg(short, long)]
        question: String,

        /// Card indices to use instead of a random draw
        #[arg(long, value_delimiter = ',')]
        cards: Option<Vec<usize>>,

        /// Disable bold styling
        #[arg(long, default_value_t = false)]
        plain: bool,
    },

    /// Show the fan layout of the unselected cards
    Layout {
        /// Deck size
        #[arg(short = 'n', long, default_value_t = 78)]
        count: usize,

        /// Hovered card index
        #[arg(long)]
        hover: Option<usize>,

        /// Cards already selected (left out of the fan)
        #[arg(long, value_delimiter = ',')]
        selected: Vec<usize>,

        /// Output as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Parse a prediction from a file or stdin and print it as JSON
    Parse {
        /// Prediction file (stdin when omitted)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Draw distinct random card indices
    Draw {
        /// Number of cards
        #[arg(short = 'n', long, default_value_t = 3)]
        count: usize,

        /// Deck size
        #[arg(long, default_value_t = 78)]
        deck_size: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_with_cards() -> Result<(), clap::Error> {
        let cli = Cli::try_parse_from(["arcana", "read", "-q", "Love?", "--cards", "1,2,3"])?;
        match cli.command {
            Commands::Read {
                question, cards, plain, ..
            } => {
                assert_eq!(question, "Love?");
                assert_eq!(cards, Some(vec![1, 2, 3]));
                assert!(!plain);
            }
            other => {
                return Err(clap::Error::raw(
                    clap::error::ErrorKind::InvalidSubcommand,
                    format!("unexpected command {other:?}"),
                ));
            }
        }
        Ok(())
    }

    #[test]
    fn test_global_config_after_subcommand() -> Result<(), clap::Error> {
        let cli = Cli::try_parse_from(["arcana", "layout", "--config", "arcana.toml", "--selected", "4,5"])?;
        assert_eq!(cli.config, Some(PathBuf::from("arcana.toml")));
        assert!(matches!(cli.command, Commands::Layout { ref selected, .. } if selected == &[4, 5]));
        Ok(())
    }

    #[test]
    fn test_read_requires_question() {
        assert!(Cli::try_parse_from(["arcana", "read"]).is_err());
    }

    #[test]
    fn test_cli_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
