use anyhow::{bail, Context, Result};
use serde_json::json;
use std::path::PathBuf;
use std::time::Instant;
use wildscan::file_reader;
use wildscan::{Alphabet, MatchConfig, Matcher, ScanStrategy};

use crate::cli_utils::{format_bytes, print_counted};

pub fn cmd_find(
    input: PathBuf,
    wildcard: char,
    alphabet: String,
    strategy: String,
    json: bool,
    stats: bool,
) -> Result<()> {
    if !wildcard.is_ascii() {
        bail!("Wildcard must be a single ASCII character, got '{}'", wildcard);
    }
    let alphabet: Alphabet = alphabet
        .parse()
        .with_context(|| format!("Invalid --alphabet '{}'", alphabet))?;
    let strategy: ScanStrategy = strategy
        .parse()
        .with_context(|| format!("Invalid --strategy '{}'", strategy))?;
    let config = MatchConfig::new(wildcard as u8, alphabet).with_strategy(strategy);

    let mut tokens = file_reader::open_tokens(&input)?;
    let pattern = tokens
        .expect_token("pattern")
        .with_context(|| format!("Failed to read pattern from {}", input.display()))?;
    let text = tokens
        .expect_token("text")
        .with_context(|| format!("Failed to read text from {}", input.display()))?;

    let build_start = Instant::now();
    let matcher = Matcher::new(&pattern, &config).context("Failed to compile pattern")?;
    let build_time = build_start.elapsed();

    let scan_start = Instant::now();
    let positions = matcher.find_all(&text);
    let scan_time = scan_start.elapsed();

    if stats {
        let s = matcher.stats();
        eprintln!("[INFO] Pattern length: {}", s.pattern_length);
        eprintln!("[INFO] Literal runs: {}", s.run_count);
        eprintln!("[INFO] Wildcards: {}", s.wildcard_count);
        eprintln!("[INFO] Automaton nodes: {}", s.node_count);
        eprintln!("[INFO] Alphabet: {} ({} symbols)", config.alphabet, s.alphabet_size);
        eprintln!("[INFO] Strategy: {}", s.strategy);
        eprintln!("[INFO] Text size: {}", format_bytes(text.len()));
        eprintln!("[INFO] Build time: {:.2?}", build_time);
        eprintln!("[INFO] Scan time: {:.2?}", scan_time);
    }

    if json {
        let mut output = json!({
            "count": positions.len(),
            "positions": positions,
        });
        if stats {
            output["stats"] = serde_json::to_value(matcher.stats())?;
        }
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_counted(&positions);
    }

    Ok(())
}
