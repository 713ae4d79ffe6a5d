mod cli_utils;
mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::{self as logger};
use std::path::PathBuf;

use commands::{cmd_find, cmd_team, cmd_tournament};

/// Environment variable holding the log filter, e.g. `WILDSCAN_LOG=debug`
const WILDSCAN_LOG: &str = "WILDSCAN_LOG";
const WILDSCAN_LOG_STYLE: &str = "WILDSCAN_LOG_STYLE";

#[derive(Parser)]
#[command(name = "wildscan")]
#[command(
    about = "Single-wildcard substring search and companion batch tools",
    long_about = "wildscan - Single-wildcard substring search built on an Aho-Corasick automaton\n\n\
    Reads whitespace-separated tokens from a file or stdin and prints a\n\
    deterministic result. Gzip-compressed input is detected automatically.\n\n\
    Tools:\n\
      • find: every start position where a pattern with '?' wildcards matches a text\n\
      • team: the most efficient balanced team\n\
      • tournament: guaranteed team size from a who-beat-whom table\n\n\
    Examples:\n\
      echo 'a?a abacaba' | wildscan find\n\
      wildscan find input.txt --strategy dense --stats\n\
      wildscan team players.txt --json\n\
      wildscan tournament games.txt.gz"
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find every match of a wildcard pattern in a text
    Find {
        /// Input with two tokens, pattern then text, or "-" for stdin
        #[arg(value_name = "INPUT", default_value = "-")]
        input: PathBuf,

        /// Wildcard symbol matching any single text symbol
        #[arg(short, long, default_value = "?")]
        wildcard: char,

        /// Literal alphabet as an inclusive FROM-TO byte range
        #[arg(short, long, default_value = "a-z")]
        alphabet: String,

        /// Transition strategy: links (suffix-link fallback) or dense (precomputed table)
        #[arg(long, default_value = "links")]
        strategy: String,

        /// Output results as JSON
        #[arg(short, long)]
        json: bool,

        /// Show automaton statistics and timings on stderr
        #[arg(short, long)]
        stats: bool,
    },

    /// Select the most efficient balanced team
    Team {
        /// Input with a player count followed by efficiencies, or "-" for stdin
        #[arg(value_name = "INPUT", default_value = "-")]
        input: PathBuf,

        /// Output results as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Compute the guaranteed team size of a tournament
    Tournament {
        /// Input with player and game counts followed by game triples, or "-" for stdin
        #[arg(value_name = "INPUT", default_value = "-")]
        input: PathBuf,

        /// Output results as JSON
        #[arg(short, long)]
        json: bool,
    },
}

fn init_logging() {
    logger::Builder::from_env(
        logger::Env::new()
            .filter_or(WILDSCAN_LOG, "error")
            .write_style(WILDSCAN_LOG_STYLE),
    )
    .format_timestamp_millis()
    .init();
    log::debug!("logging initialized");
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Find {
            input,
            wildcard,
            alphabet,
            strategy,
            json,
            stats,
        } => cmd_find(input, wildcard, alphabet, strategy, json, stats),
        Commands::Team { input, json } => cmd_team(input, json),
        Commands::Tournament { input, json } => cmd_tournament(input, json),
    }
}
