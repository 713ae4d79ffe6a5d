use anyhow::{Context, Result};
use serde_json::json;
use std::path::PathBuf;
use wildscan::file_reader;
use wildscan::tournament::read_tournament;

pub fn cmd_tournament(input: PathBuf, json: bool) -> Result<()> {
    let mut tokens = file_reader::open_tokens(&input)?;
    let tournament = read_tournament(&mut tokens)
        .with_context(|| format!("Failed to read games from {}", input.display()))?;

    let size = tournament
        .guaranteed_team_size()
        .context("Failed to compute team size")?;

    if json {
        let components = tournament.components();
        let output = json!({
            "players": tournament.player_count(),
            "components": components.count(),
            "team_size": size,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", size);
    }

    Ok(())
}
